//! 日志工具模块
//!
//! 提供运行横幅和统计信息的输出函数
use crate::config::Config;
use crate::orchestrator::RunStats;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目拆分模式");
    info!("📂 输入目录: {}", config.input_root.display());
    info!("📂 输出目录: {}", config.output_root.display());
    info!("📊 最大并发文件数: {}", config.max_concurrent_files);
    info!("{}", "=".repeat(60));
}

/// 记录文件扫描结果
///
/// # 参数
/// - `total`: 文件总数
/// - `max_concurrent`: 最大并发数
pub fn log_files_found(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的文件", total);
    info!("📋 最多同时处理 {} 个文件，完成顺序不固定\n", max_concurrent);
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "📄 文件: {} (失败 {})",
        stats.files, stats.files_failed
    );
    info!("📑 页面: {}", stats.pages);
    info!("✅ 已写入题目: {}", stats.questions_written);
    info!("⏭️ 跳过题目: {}", stats.questions_skipped);
    info!("❌ 写入失败: {}", stats.writes_failed);
    info!("{}", "=".repeat(60));
}
