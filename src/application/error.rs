//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{ChapterWriterError, DocumentSourceError};
use crate::domain::chapter::ChapterError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 文档来源错误
    #[error("Source error: {0}")]
    SourceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<DocumentSourceError> for ApplicationError {
    fn from(err: DocumentSourceError) -> Self {
        Self::SourceError(err.to_string())
    }
}

impl From<ChapterWriterError> for ApplicationError {
    fn from(err: ChapterWriterError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<ChapterError> for ApplicationError {
    fn from(err: ChapterError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
