//! Chapter Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChapterError {
    #[error("无效的章节名: {0}")]
    InvalidName(String),

    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("无效的标记: {0}")]
    InvalidMarker(String),

    #[error("章节名重复: {0}")]
    DuplicateName(String),

    #[error("章节列表为空")]
    EmptySpecList,
}
