//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文件处理器
//! - 管理应用生命周期（初始化、运行）
//! - 遍历输入目录，得到 Vec<PathBuf>
//! - 每个文件一个并发任务（Semaphore 限流）
//! - 输出全局统计信息
//!
//! ### `file_processor` - 单个文件处理器
//! - 读取并解析一个文件
//! - 遍历页面（Vec<Page>），分配页面序号
//! - 等待本文件的写入任务
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! file_processor (处理 Vec<Page>)
//!     ↓
//! workflow::PageFlow (处理单个 Page)
//!     ↓
//! services (能力层：walk / transform / write)
//! ```

pub mod batch_processor;
pub mod file_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunStats};
pub use file_processor::process_file;
