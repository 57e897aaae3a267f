//! Document Source Port - 文档来源端口
//!
//! 抽象"把一份 UTF-8 文档整体读入内存"的能力

use std::path::Path;

use thiserror::Error;

/// 文档来源错误
#[derive(Debug, Error)]
pub enum DocumentSourceError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document is not valid UTF-8: {0}")]
    InvalidEncoding(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 文档来源端口
pub trait DocumentSourcePort: Send + Sync {
    /// 读取整份文档
    ///
    /// 文档在一次运行期间视为不可变文本
    fn load(&self, path: &Path) -> Result<String, DocumentSourceError>;
}
