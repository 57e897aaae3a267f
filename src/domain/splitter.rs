//! 章节分割器
//!
//! 对文档做一次顺序扫描，用单调递进的搜索游标定位每个章节的
//! 起始标记，并派生章节切片。纯函数，不做 I/O，不打日志；
//! 跳过/截断情况由调用方根据返回结果上报。

use super::chapter::{ChapterName, ChapterSlice, ChapterSpec, EndBoundary, Title};

/// 章节被跳过的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 起始标记在搜索游标之后未出现
    StartMarkerNotFound,
}

/// 被跳过的章节（非致命，运行继续）
#[derive(Debug, Clone)]
pub struct SkippedChapter {
    pub name: ChapterName,
    pub title: Title,
    pub reason: SkipReason,
}

/// 结束边界缺失、被截断到文档末尾的章节（非致命）
#[derive(Debug, Clone)]
pub struct TruncatedChapter {
    pub name: ChapterName,
    /// 未找到的边界标记
    pub expected_marker: String,
}

/// 分割结果
#[derive(Debug, Clone, Default)]
pub struct SplitOutcome {
    /// 按章节表顺序产出的切片
    pub slices: Vec<ChapterSlice>,
    /// 起始标记缺失而跳过的章节
    pub skipped: Vec<SkippedChapter>,
    /// 结束边界缺失而截断的章节
    pub truncated: Vec<TruncatedChapter>,
}

/// 分割文档
///
/// 算法:
/// 1. 按章节表顺序，在游标处（含）之后查找每章起始标记的首次出现；
///    命中后游标推进到标记结束处，保证后文重复出现的标记文本不会
///    误匹配到靠前的章节
/// 2. 起始标记缺失的章节跳过，运行继续
/// 3. 结束边界: 非最后一章取下一章起始标记的位置；最后一章取其声明的
///    结束标记位置；边界标记缺失则降级到文档末尾
///
/// 切片内容从起始标记之后开始（输出时标题行代替标记文本）。
pub fn split_document(document: &str, specs: &[ChapterSpec]) -> SplitOutcome {
    let mut outcome = SplitOutcome::default();
    // 单调搜索游标（字节偏移）
    let mut cursor = 0usize;

    for (i, spec) in specs.iter().enumerate() {
        let start = match find_from(document, spec.start_marker().as_str(), cursor) {
            Some(pos) => pos,
            None => {
                outcome.skipped.push(SkippedChapter {
                    name: spec.name().clone(),
                    title: spec.title().clone(),
                    reason: SkipReason::StartMarkerNotFound,
                });
                continue;
            }
        };

        let content_start = start + spec.start_marker().len();
        let (end, boundary) = slice_end(document, content_start, spec, specs.get(i + 1));

        if boundary == EndBoundary::DocumentEnd {
            if let Some(marker) = expected_boundary_marker(spec, i, specs) {
                outcome.truncated.push(TruncatedChapter {
                    name: spec.name().clone(),
                    expected_marker: marker.to_string(),
                });
            }
        }

        let content = document[content_start..end].to_string();
        let slice = ChapterSlice::new(
            spec.name().clone(),
            spec.title().clone(),
            start,
            end,
            content,
            boundary,
        )
        .expect("slice offsets ordered: end is searched at or after the marker end");
        outcome.slices.push(slice);

        cursor = content_start;
    }

    outcome
}

/// 计算章节结束边界
///
/// 返回 (结束偏移, 边界类型)
fn slice_end(
    document: &str,
    from: usize,
    spec: &ChapterSpec,
    next: Option<&ChapterSpec>,
) -> (usize, EndBoundary) {
    if let Some(next_spec) = next {
        match find_from(document, next_spec.start_marker().as_str(), from) {
            Some(pos) => (pos, EndBoundary::NextChapter),
            None => (document.len(), EndBoundary::DocumentEnd),
        }
    } else if let Some(end_marker) = spec.end_marker() {
        match find_from(document, end_marker.as_str(), from) {
            Some(pos) => (pos, EndBoundary::EndMarker),
            None => (document.len(), EndBoundary::DocumentEnd),
        }
    } else {
        (document.len(), EndBoundary::DocumentEnd)
    }
}

/// 本章本应命中的结束边界标记（无声明边界时为 None）
fn expected_boundary_marker<'a>(
    spec: &'a ChapterSpec,
    index: usize,
    specs: &'a [ChapterSpec],
) -> Option<&'a str> {
    if let Some(next_spec) = specs.get(index + 1) {
        Some(next_spec.start_marker().as_str())
    } else {
        spec.end_marker().map(|m| m.as_str())
    }
}

/// 在 document 的 from 偏移处（含）开始查找 needle 的首次出现
///
/// 返回相对整个文档的字节偏移；from 越界时返回 None
fn find_from(document: &str, needle: &str, from: usize) -> Option<usize> {
    document.get(from..)?.find(needle).map(|pos| from + pos)
}
