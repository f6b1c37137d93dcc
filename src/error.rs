use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 按照影响范围分类：
/// - 遍历错误：致命，终止整次运行
/// - 读取 / 解析错误：跳过当前文件
/// - 键缺失 / 键非法 / 记录非法：跳过当前题目
/// - 序列化 / 写入错误：记录日志后继续
#[derive(Debug, Error)]
pub enum AppError {
    /// 无法列出目录
    #[error("无法遍历目录 ({}): {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 读取输入文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 输入文件不是 页面 → 题目 → 元数据 结构
    #[error("解析文件失败 ({}): {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// 题目缺少标识字段
    #[error("题目缺少标识字段 'key' (页面: {page}, 题目: {question})")]
    MissingKey { page: String, question: String },

    /// 标识字段无法用作文件名
    #[error("标识字段无法用作文件名 (页面: {page}, 题目: {question}): {reason}")]
    InvalidKey {
        page: String,
        question: String,
        reason: String,
    },

    /// 题目元数据不是映射
    #[error("题目元数据不是映射 (页面: {page}, 题目: {question})")]
    InvalidRecord { page: String, question: String },

    /// 序列化输出记录失败
    #[error("序列化失败 ({filename}): {source}")]
    Serialize {
        filename: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// 写入输出文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// 创建解析错误
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AppError::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// 创建标识字段非法错误
    pub fn invalid_key(
        page: impl Into<String>,
        question: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidKey {
            page: page.into(),
            question: question.into(),
            reason: reason.into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
