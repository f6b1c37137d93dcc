//! 页面处理上下文
//!
//! 封装"我正在处理哪个文件的第几个页面"这一信息

use std::fmt::Display;
use std::path::PathBuf;

/// 页面处理上下文
#[derive(Debug, Clone)]
pub struct PageCtx {
    /// 页面序号，整次运行内递增（仅用于日志显示，不参与文件名）
    pub ordinal: usize,

    /// 页面名
    pub page_name: String,

    /// 来源文件
    pub source: PathBuf,
}

impl PageCtx {
    pub fn new(ordinal: usize, page_name: String, source: PathBuf) -> Self {
        Self {
            ordinal,
            page_name,
            source,
        }
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[页面#{} {} 文件 {}]",
            self.ordinal,
            self.page_name,
            self.source.display()
        )
    }
}
