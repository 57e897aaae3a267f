//! Chapter Writer Port - 章节输出端口
//!
//! 抽象章节文件、索引与清单的写出

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::chapter::ChapterSlice;
use crate::domain::SplitOutcome;

/// 章节输出错误
#[derive(Debug, Error)]
pub enum ChapterWriterError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 章节输出端口
pub trait ChapterWriterPort: Send + Sync {
    /// 写出单个章节文件（标题行 + 空行 + 切片内容），返回写入路径
    fn write_chapter(&self, slice: &ChapterSlice) -> Result<PathBuf, ChapterWriterError>;

    /// 写出导航索引（按章节表顺序列出标题），返回写入路径
    fn write_index(&self, slices: &[ChapterSlice]) -> Result<PathBuf, ChapterWriterError>;

    /// 写出机读清单（产出与跳过的章节、偏移、时间戳），返回写入路径
    fn write_manifest(&self, outcome: &SplitOutcome) -> Result<PathBuf, ChapterWriterError>;
}
