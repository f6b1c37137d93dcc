//! 批量文件处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责整次运行的调度和统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：输出启动信息，检查输出目录
//! 2. **遍历输入**：列出输入根目录下的所有文件（失败即终止）
//! 3. **并发派发**：每个文件一个 `tokio::spawn` 任务，Semaphore 限制并发数
//! 4. **全局统计**：等待所有文件任务完成后汇总结果
//!
//! ## 并发语义
//!
//! 文件之间没有顺序保证。不同文件派生出相同文件名时，
//! 最后完成的写入生效，不加锁也不检测冲突。

use crate::config::Config;
use crate::orchestrator::file_processor;
use crate::services::{RecordWriter, TreeWalker};
use crate::utils::logging::{log_files_found, log_startup, print_final_stats};
use crate::workflow::PageFlow;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    walker: TreeWalker,
    flow: PageFlow,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let config = config.normalized();
        log_startup(&config);

        // 输出目录由使用者事先创建，这里只提示
        match tokio::fs::metadata(&config.output_root).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => warn!(
                "⚠️ 输出路径不是目录: {}，写入将会失败",
                config.output_root.display()
            ),
            Err(_) => warn!(
                "⚠️ 输出目录不存在: {}，写入将会失败",
                config.output_root.display()
            ),
        }

        let flow = PageFlow::new(RecordWriter::new(&config.output_root));

        Ok(Self {
            config,
            walker: TreeWalker::new(),
            flow,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        info!("\n📁 正在扫描输入目录...");
        let files = self
            .walker
            .walk(&self.config.input_root)
            .await
            .with_context(|| format!("无法遍历输入目录: {}", self.config.input_root.display()))?;

        if files.is_empty() {
            warn!("⚠️ 输入目录中没有文件，程序结束");
            let stats = RunStats::default();
            print_final_stats(&stats);
            return Ok(stats);
        }

        log_files_found(files.len(), self.config.max_concurrent_files);

        let stats = self.process_all_files(files).await?;

        print_final_stats(&stats);

        if self.config.strict_exit && stats.has_errors() {
            anyhow::bail!("运行中出现 {} 个错误", stats.error_count());
        }

        Ok(stats)
    }

    /// 并发处理所有文件
    async fn process_all_files(&self, files: Vec<PathBuf>) -> Result<RunStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_files));
        let page_counter = Arc::new(AtomicUsize::new(0));
        let mut handles = Vec::with_capacity(files.len());

        for path in files {
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = self.flow.clone();
            let page_counter = page_counter.clone();
            let verbose = self.config.verbose_logging;

            let task_path = path.clone();
            let handle = tokio::spawn(async move {
                let _permit = permit;
                file_processor::process_file(&task_path, &flow, &page_counter, verbose).await
            });
            handles.push((path, handle));
        }

        // 等待所有任务完成
        let mut stats = RunStats::default();
        for (path, handle) in handles {
            match handle.await {
                Ok(file_stats) => stats.merge(&file_stats),
                Err(e) => {
                    error!("[{}] 任务执行失败: {}", path.display(), e);
                    stats.files += 1;
                    stats.files_failed += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// 运行统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// 处理的文件数
    pub files: usize,
    /// 读取或解析失败的文件数
    pub files_failed: usize,
    /// 处理的页面数
    pub pages: usize,
    /// 成功写入的题目数
    pub questions_written: usize,
    /// 转换失败而跳过的题目数
    pub questions_skipped: usize,
    /// 写入失败数
    pub writes_failed: usize,
}

impl RunStats {
    pub fn merge(&mut self, other: &RunStats) {
        self.files += other.files;
        self.files_failed += other.files_failed;
        self.pages += other.pages;
        self.questions_written += other.questions_written;
        self.questions_skipped += other.questions_skipped;
        self.writes_failed += other.writes_failed;
    }

    pub fn error_count(&self) -> usize {
        self.files_failed + self.questions_skipped + self.writes_failed
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_every_counter() {
        let mut total = RunStats {
            files: 1,
            pages: 2,
            questions_written: 3,
            ..Default::default()
        };
        total.merge(&RunStats {
            files: 1,
            files_failed: 1,
            pages: 0,
            questions_written: 0,
            questions_skipped: 2,
            writes_failed: 1,
        });

        assert_eq!(total.files, 2);
        assert_eq!(total.pages, 2);
        assert_eq!(total.questions_written, 3);
        assert_eq!(total.error_count(), 4);
        assert!(total.has_errors());
        assert!(!RunStats::default().has_errors());
    }
}
