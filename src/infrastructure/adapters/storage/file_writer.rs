//! File Chapter Writer - 文件系统章节输出实现
//!
//! 实现 ChapterWriterPort trait:
//! - 每章一个 Markdown 文件（标题行 + 空行 + 切片内容）
//! - README.md 导航索引
//! - manifest.json 机读清单

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{ChapterWriterError, ChapterWriterPort};
use crate::domain::chapter::{ChapterSlice, EndBoundary};
use crate::domain::{SkipReason, SplitOutcome};

/// 索引文件名
const INDEX_FILE_NAME: &str = "README.md";

/// 清单文件名
const MANIFEST_FILE_NAME: &str = "manifest.json";

/// 文件章节输出配置
#[derive(Debug, Clone)]
pub struct FileChapterWriterConfig {
    /// 输出目录
    pub output_dir: PathBuf,
    /// 索引文件顶部标题
    pub index_title: String,
}

/// 文件系统章节输出
pub struct FileChapterWriter {
    output_dir: PathBuf,
    index_title: String,
}

impl FileChapterWriter {
    /// 创建章节输出，输出目录不存在时自动创建
    pub fn new(config: FileChapterWriterConfig) -> Result<Self, ChapterWriterError> {
        fs::create_dir_all(&config.output_dir)
            .map_err(|e| ChapterWriterError::IoError(e.to_string()))?;

        Ok(Self {
            output_dir: config.output_dir,
            index_title: config.index_title,
        })
    }

    /// 输出目录
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn chapter_path(&self, slice: &ChapterSlice) -> PathBuf {
        self.output_dir.join(slice.name().file_name())
    }
}

impl ChapterWriterPort for FileChapterWriter {
    fn write_chapter(&self, slice: &ChapterSlice) -> Result<PathBuf, ChapterWriterError> {
        let path = self.chapter_path(slice);

        let mut body = format!("# {}\n\n", slice.title());
        body.push_str(slice.content());

        fs::write(&path, body).map_err(|e| ChapterWriterError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved chapter: name={}, path={}",
            slice.name(),
            path.display()
        );

        Ok(path)
    }

    fn write_index(&self, slices: &[ChapterSlice]) -> Result<PathBuf, ChapterWriterError> {
        let path = self.output_dir.join(INDEX_FILE_NAME);

        let mut index = format!("# {}\n\n", self.index_title);
        index.push_str(
            "The source document is split into per-chapter files for easier navigation and search.\n\n",
        );
        index.push_str("## Contents\n\n");
        for slice in slices {
            index.push_str(&format!(
                "- [{}]({})\n",
                slice.title(),
                slice.name().file_name()
            ));
        }

        fs::write(&path, index).map_err(|e| ChapterWriterError::IoError(e.to_string()))?;

        tracing::debug!("Saved index: path={}", path.display());

        Ok(path)
    }

    fn write_manifest(&self, outcome: &SplitOutcome) -> Result<PathBuf, ChapterWriterError> {
        let path = self.output_dir.join(MANIFEST_FILE_NAME);

        let manifest = Manifest::from_outcome(outcome);
        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| ChapterWriterError::SerializationError(e.to_string()))?;

        fs::write(&path, json).map_err(|e| ChapterWriterError::IoError(e.to_string()))?;

        tracing::debug!("Saved manifest: path={}", path.display());

        Ok(path)
    }
}

/// 清单文件结构（DTO）
#[derive(Debug, Serialize)]
struct Manifest {
    generated_at: DateTime<Utc>,
    chapters: Vec<ManifestChapter>,
    skipped: Vec<ManifestSkipped>,
}

#[derive(Debug, Serialize)]
struct ManifestChapter {
    name: String,
    title: String,
    file: String,
    start: usize,
    end: usize,
    boundary: EndBoundary,
    /// 结束边界标记缺失、内容截断到文档末尾
    truncated: bool,
}

#[derive(Debug, Serialize)]
struct ManifestSkipped {
    name: String,
    title: String,
    reason: &'static str,
}

impl Manifest {
    fn from_outcome(outcome: &SplitOutcome) -> Self {
        let chapters = outcome
            .slices
            .iter()
            .map(|slice| ManifestChapter {
                name: slice.name().to_string(),
                title: slice.title().to_string(),
                file: slice.name().file_name(),
                start: slice.start(),
                end: slice.end(),
                boundary: slice.boundary(),
                truncated: outcome
                    .truncated
                    .iter()
                    .any(|t| t.name == *slice.name()),
            })
            .collect();

        let skipped = outcome
            .skipped
            .iter()
            .map(|s| ManifestSkipped {
                name: s.name.to_string(),
                title: s.title.to_string(),
                reason: match s.reason {
                    SkipReason::StartMarkerNotFound => "start_marker_not_found",
                },
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            chapters,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::domain::chapter::{ChapterName, ChapterSpec, Marker, Title};
    use crate::domain::split_document;

    fn writer(dir: &Path) -> FileChapterWriter {
        FileChapterWriter::new(FileChapterWriterConfig {
            output_dir: dir.to_path_buf(),
            index_title: "Rulebook".to_string(),
        })
        .unwrap()
    }

    fn spec(name: &str, title: &str, start: &str) -> ChapterSpec {
        ChapterSpec::new(
            ChapterName::new(name).unwrap(),
            Title::new(title).unwrap(),
            Marker::new(start).unwrap(),
            None,
        )
    }

    fn sample_outcome() -> SplitOutcome {
        let specs = vec![spec("ch1", "One", "A"), spec("ch2", "Two", "B")];
        split_document("xA-content1-Bcontent2", &specs)
    }

    #[test]
    fn test_write_chapter_heading_and_content() {
        let temp_dir = tempdir().unwrap();
        let writer = writer(temp_dir.path());

        let outcome = sample_outcome();
        let path = writer.write_chapter(&outcome.slices[0]).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(body, "# One\n\n-content1-");
        assert_eq!(path.file_name().unwrap(), "ch1.md");
    }

    #[test]
    fn test_write_index_lists_titles_in_order() {
        let temp_dir = tempdir().unwrap();
        let writer = writer(temp_dir.path());

        let outcome = sample_outcome();
        let path = writer.write_index(&outcome.slices).unwrap();

        let index = fs::read_to_string(&path).unwrap();
        assert!(index.starts_with("# Rulebook\n"));
        assert!(index.contains("## Contents"));
        let one = index.find("- [One](ch1.md)").unwrap();
        let two = index.find("- [Two](ch2.md)").unwrap();
        assert!(one < two);
    }

    #[test]
    fn test_write_manifest_is_valid_json() {
        let temp_dir = tempdir().unwrap();
        let writer = writer(temp_dir.path());

        let specs = vec![spec("ch1", "One", "A"), spec("ch2", "Two", "MISSING")];
        let outcome = split_document("xA-content", &specs);
        let path = writer.write_manifest(&outcome).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["chapters"].as_array().unwrap().len(), 1);
        assert_eq!(value["chapters"][0]["name"], "ch1");
        assert_eq!(value["chapters"][0]["file"], "ch1.md");
        // 下一章标记缺失，章节 1 截断到文档末尾
        assert_eq!(value["chapters"][0]["boundary"], "document_end");
        assert_eq!(value["chapters"][0]["truncated"], true);
        assert_eq!(value["skipped"][0]["name"], "ch2");
        assert_eq!(value["skipped"][0]["reason"], "start_marker_not_found");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_new_creates_output_dir() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("rules").join("split");

        let writer = writer(&nested);
        assert!(writer.output_dir().exists());
    }
}
