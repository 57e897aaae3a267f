//! 应用层端口定义
//!
//! 六边形架构端口:
//! - DocumentSourcePort: 文档来源
//! - ChapterWriterPort: 章节输出

mod chapter_writer;
mod document_source;

pub use chapter_writer::{ChapterWriterError, ChapterWriterPort};
pub use document_source::{DocumentSourceError, DocumentSourcePort};
