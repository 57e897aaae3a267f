//! 基础设施适配器

pub mod storage;

pub use storage::{FileChapterWriter, FileChapterWriterConfig, FileDocumentSource};
