//! Split Command Handlers - 分割命令处理器

use std::sync::Arc;

use crate::application::commands::{SplitRulebook, SplitRulebookResponse, WrittenChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChapterWriterPort, DocumentSourcePort};
use crate::domain::chapter::{validate_specs, ChapterSpec};
use crate::domain::split_document;

/// SplitRulebook 命令处理器
///
/// 编排一次完整的分割运行:
/// 1. 读入文档
/// 2. 分割为章节切片（纯领域逻辑）
/// 3. 写出章节文件、索引与清单
///
/// 起始/结束标记缺失属于降级情况（跳过/截断 + 警告），不会使运行失败。
pub struct SplitRulebookHandler {
    specs: Vec<ChapterSpec>,
    source: Arc<dyn DocumentSourcePort>,
    writer: Arc<dyn ChapterWriterPort>,
}

impl SplitRulebookHandler {
    pub fn new(
        specs: Vec<ChapterSpec>,
        source: Arc<dyn DocumentSourcePort>,
        writer: Arc<dyn ChapterWriterPort>,
    ) -> Self {
        Self {
            specs,
            source,
            writer,
        }
    }

    pub fn handle(&self, command: SplitRulebook) -> Result<SplitRulebookResponse, ApplicationError> {
        validate_specs(&self.specs)?;

        let document = self.source.load(&command.input_path)?;
        tracing::info!(
            "Loaded document: path={}, size={} bytes",
            command.input_path.display(),
            document.len()
        );

        let outcome = split_document(&document, &self.specs);

        for skipped in &outcome.skipped {
            tracing::warn!(
                "Start marker not found, chapter skipped: {}",
                skipped.name
            );
        }
        for truncated in &outcome.truncated {
            tracing::warn!(
                "End boundary '{}' not found, chapter truncated at document end: {}",
                truncated.expected_marker,
                truncated.name
            );
        }

        let mut written = Vec::with_capacity(outcome.slices.len());
        for slice in &outcome.slices {
            let path = self.writer.write_chapter(slice)?;
            tracing::debug!(
                "Wrote chapter: name={}, range={}..{}, path={}",
                slice.name(),
                slice.start(),
                slice.end(),
                path.display()
            );
            written.push(WrittenChapter {
                name: slice.name().to_string(),
                title: slice.title().to_string(),
                path,
                content_bytes: slice.content().len(),
            });
        }

        let index_path = self.writer.write_index(&outcome.slices)?;
        let manifest_path = self.writer.write_manifest(&outcome)?;

        tracing::info!(
            "Split complete: written={}, skipped={}, truncated={}",
            written.len(),
            outcome.skipped.len(),
            outcome.truncated.len()
        );

        Ok(SplitRulebookResponse {
            written,
            skipped: outcome.skipped,
            truncated: outcome.truncated,
            index_path,
            manifest_path,
        })
    }
}
