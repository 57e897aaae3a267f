//! 存储适配器 - 文档读入与章节写出

mod file_source;
mod file_writer;

pub use file_source::FileDocumentSource;
pub use file_writer::{FileChapterWriter, FileChapterWriterConfig};
