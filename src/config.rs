use std::path::PathBuf;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入根目录
    pub input_root: PathBuf,
    /// 输出目录（必须事先存在）
    pub output_root: PathBuf,
    /// 同时处理的文件数量
    pub max_concurrent_files: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 出现任何错误时以非零状态退出
    pub strict_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("service"),
            output_root: PathBuf::from("g6"),
            max_concurrent_files: 100,
            verbose_logging: false,
            strict_exit: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 按变量名取值构造配置，取不到或解析失败时使用默认值
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            input_root: lookup("INPUT_ROOT").map(PathBuf::from).unwrap_or(default.input_root),
            output_root: lookup("OUTPUT_ROOT").map(PathBuf::from).unwrap_or(default.output_root),
            max_concurrent_files: lookup("MAX_CONCURRENT_FILES").and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_files),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            strict_exit: lookup("STRICT_EXIT").and_then(|v| v.parse().ok()).unwrap_or(default.strict_exit),
        }
        .normalized()
    }

    /// 并发数至少为 1，否则 Semaphore 永远拿不到许可
    pub fn normalized(mut self) -> Self {
        self.max_concurrent_files = self.max_concurrent_files.max(1);
        self
    }

    /// 使用指定的输入输出目录，其余保持默认
    pub fn with_roots(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..Self::default()
        }
    }
}
