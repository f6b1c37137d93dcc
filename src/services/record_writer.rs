//! 记录写入服务 - 业务能力层
//!
//! 只负责"把一条记录写成输出目录下的一个文件"能力

use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// 记录写入服务
///
/// 职责：
/// - 序列化为 YAML 并写入 `output_root/filename`
/// - 已存在则覆盖，不检测重名，后写者生效
/// - 不创建输出目录
#[derive(Debug, Clone)]
pub struct RecordWriter {
    output_root: PathBuf,
}

impl RecordWriter {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// 写入一条记录
    ///
    /// # 返回
    /// 返回写入的完整路径
    pub async fn write(&self, filename: &str, record: &QuestionRecord) -> AppResult<PathBuf> {
        let content = serde_yaml::to_string(record).map_err(|source| AppError::Serialize {
            filename: filename.to_string(),
            source,
        })?;

        let path = self.output_root.join(filename);
        fs::write(&path, content)
            .await
            .map_err(|source| AppError::Write {
                path: path.clone(),
                source,
            })?;

        debug!("写入完成: {}", path.display());
        Ok(path)
    }
}
