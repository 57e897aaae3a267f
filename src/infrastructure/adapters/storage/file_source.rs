//! File Document Source - 本地文件文档来源
//!
//! 实现 DocumentSourcePort trait

use std::fs;
use std::path::Path;

use crate::application::ports::{DocumentSourceError, DocumentSourcePort};

/// 本地文件文档来源
///
/// 按 UTF-8 读取整份文档
#[derive(Debug, Default)]
pub struct FileDocumentSource;

impl FileDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentSourcePort for FileDocumentSource {
    fn load(&self, path: &Path) -> Result<String, DocumentSourceError> {
        if !path.exists() {
            return Err(DocumentSourceError::NotFound(
                path.to_string_lossy().to_string(),
            ));
        }

        let bytes = fs::read(path).map_err(|e| DocumentSourceError::IoError(e.to_string()))?;

        String::from_utf8(bytes).map_err(|e| {
            DocumentSourceError::InvalidEncoding(format!("{}: {}", path.display(), e))
        })
    }
}
