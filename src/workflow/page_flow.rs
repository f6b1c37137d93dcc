//! 页面处理流程 - 流程层
//!
//! 核心职责：定义"一个页面"的完整处理流程
//!
//! 流程顺序：
//! 1. 逐题转换（失败的题目跳过，不影响同页其他题目）
//! 2. 输出进度块（页面序号、页面名、派生文件名列表）
//! 3. 为每道题派发一个写入任务，返回任务句柄
//!
//! 进度块在写入完成之前输出，列出的文件此时不一定已经存在。

use std::path::PathBuf;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::models::{Page, TransformedQuestion};
use crate::services::{QuestionTransformer, RecordWriter};
use crate::workflow::page_ctx::PageCtx;

/// 一个派发中的写入任务
pub struct PendingWrite {
    pub filename: String,
    pub handle: JoinHandle<AppResult<PathBuf>>,
}

/// 页面处理结果
pub struct PageOutcome {
    /// 已派发的写入任务
    pub writes: Vec<PendingWrite>,
    /// 转换失败而跳过的题目数
    pub skipped: usize,
}

/// 页面处理流程
///
/// - 不持有输入文件，只处理已解析的页面
/// - 不等待写入完成，由编排层统一收集句柄
#[derive(Clone)]
pub struct PageFlow {
    transformer: QuestionTransformer,
    writer: RecordWriter,
}

impl PageFlow {
    pub fn new(writer: RecordWriter) -> Self {
        Self {
            transformer: QuestionTransformer::new(),
            writer,
        }
    }

    pub fn run(&self, ctx: &PageCtx, page: &Page) -> PageOutcome {
        let mut transformed = Vec::with_capacity(page.questions.len());
        let mut skipped = 0;

        for question in &page.questions {
            match self
                .transformer
                .transform(&page.name, &question.text, &question.metadata)
            {
                Ok(result) => transformed.push(result),
                Err(e) => {
                    warn!("{} ⚠️ 跳过题目: {}", ctx, e);
                    skipped += 1;
                }
            }
        }

        log_page(ctx, &transformed);

        let writes = transformed
            .into_iter()
            .map(|question| self.dispatch_write(question))
            .collect();

        PageOutcome { writes, skipped }
    }

    fn dispatch_write(&self, question: TransformedQuestion) -> PendingWrite {
        let writer = self.writer.clone();
        let filename = question.filename.clone();
        let handle =
            tokio::spawn(async move { writer.write(&question.filename, &question.record).await });

        PendingWrite { filename, handle }
    }
}

/// 输出页面进度块
fn log_page(ctx: &PageCtx, questions: &[TransformedQuestion]) {
    info!("{}", format_progress(ctx.ordinal, &ctx.page_name, questions));
}

pub(crate) fn format_progress(
    ordinal: usize,
    page_name: &str,
    questions: &[TransformedQuestion],
) -> String {
    let mut block = format!(
        "- Page {}\n    name: {}\n    questions: ",
        ordinal, page_name
    );
    for question in questions {
        block.push_str("\n        - ");
        block.push_str(&question.filename);
    }
    block
}
