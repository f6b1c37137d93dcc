//! # Question Flatten
//!
//! 将输入目录树中的题目定义文件拆分为"一题一文件"的 YAML 输出
//!
//! 输入文件结构：`{ 页面名: { 题目文本: { key: 标识, ...其他字段 } } }`，
//! 每道题输出为 `<输出目录>/<key>.yml`，内容去掉 `key`，并加入 `question: 题目文本`。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `PageDefinition` / `Page` / `QuestionRecord`
//! - `models/loaders` - 读取并解析 YAML 输入文件
//!
//! ### ② 业务能力层（Services）
//! - `TreeWalker` - 递归列出输入目录下的文件
//! - `QuestionTransformer` - 单题转换
//! - `RecordWriter` - 单条记录写入
//!
//! ### ③ 流程层（Workflow）
//! - `PageCtx` - 上下文封装（页面序号 + 页面名 + 来源文件）
//! - `PageFlow` - 一个页面的流程（transform → 进度日志 → 派发写入）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 整次运行，管理并发和统计
//! - `orchestrator/file_processor` - 单个文件，遍历页面并等待写入

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{PageDefinition, QuestionRecord};
pub use orchestrator::{App, RunStats};
pub use services::{QuestionTransformer, RecordWriter, TreeWalker};
pub use workflow::{PageCtx, PageFlow};
