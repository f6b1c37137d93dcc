//! 单个文件处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **读取解析**：读取一个输入文件并解析为页面列表
//! 2. **遍历页面**：为每个页面分配全局序号，交给 `PageFlow`
//! 3. **收集写入**：等待本文件派发的所有写入任务并统计结果
//!
//! 读取或解析失败只影响本文件；单题或单次写入失败只影响该题。

use crate::models::load_definition;
use crate::orchestrator::RunStats;
use crate::workflow::{PageCtx, PageFlow, PendingWrite};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{error, info};

/// 处理单个输入文件
///
/// # 参数
/// - `path`: 输入文件路径
/// - `flow`: 页面处理流程
/// - `page_counter`: 整次运行共享的页面计数器（仅用于日志）
/// - `verbose`: 是否逐条记录写入结果
///
/// # 返回
/// 返回本文件的统计信息
pub async fn process_file(
    path: &Path,
    flow: &PageFlow,
    page_counter: &AtomicUsize,
    verbose: bool,
) -> RunStats {
    let mut stats = RunStats {
        files: 1,
        ..Default::default()
    };

    let definition = match load_definition(path).await {
        Ok(definition) => definition,
        Err(e) => {
            error!("❌ 跳过文件: {}", e);
            stats.files_failed += 1;
            return stats;
        }
    };

    let mut pending = Vec::with_capacity(definition.question_count());
    for page in &definition.pages {
        let ordinal = page_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let ctx = PageCtx::new(ordinal, page.name.clone(), path.to_path_buf());

        let outcome = flow.run(&ctx, page);
        stats.pages += 1;
        stats.questions_skipped += outcome.skipped;
        pending.extend(outcome.writes);
    }

    await_writes(pending, &mut stats, verbose).await;
    stats
}

async fn await_writes(pending: Vec<PendingWrite>, stats: &mut RunStats, verbose: bool) {
    for write in pending {
        match write.handle.await {
            Ok(Ok(written)) => {
                stats.questions_written += 1;
                if verbose {
                    info!("✓ 已写入: {}", written.display());
                }
            }
            Ok(Err(e)) => {
                error!("❌ {}", e);
                stats.writes_failed += 1;
            }
            Err(e) => {
                error!("[{}] 写入任务执行失败: {}", write.filename, e);
                stats.writes_failed += 1;
            }
        }
    }
}
