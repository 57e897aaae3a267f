//! Chapter Context - Entities

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ChapterError, ChapterName, Marker, Title};

/// 章节描述 - 一次运行前静态定义，运行期间不可变
///
/// 不变量:
/// - start_marker 非空
/// - end_marker 仅对列表中最后一个章节生效（中间章节以下一章的
///   start_marker 为边界）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSpec {
    /// 章节名（输出文件名）
    name: ChapterName,
    /// 展示标题（输出文件首行）
    title: Title,
    /// 起始标记
    start_marker: Marker,
    /// 结束标记（可选）
    end_marker: Option<Marker>,
}

impl ChapterSpec {
    pub fn new(
        name: ChapterName,
        title: Title,
        start_marker: Marker,
        end_marker: Option<Marker>,
    ) -> Self {
        Self {
            name,
            title,
            start_marker,
            end_marker,
        }
    }

    pub fn name(&self) -> &ChapterName {
        &self.name
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn start_marker(&self) -> &Marker {
        &self.start_marker
    }

    pub fn end_marker(&self) -> Option<&Marker> {
        self.end_marker.as_ref()
    }
}

/// 章节结束边界的确定方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndBoundary {
    /// 下一章的起始标记
    NextChapter,
    /// 本章声明的结束标记
    EndMarker,
    /// 文档末尾（兜底，含结束边界缺失的降级情况）
    DocumentEnd,
}

/// 章节切片 - 从文档派生，创建后不可变
///
/// 不变量:
/// - start 为起始标记在文档中的字节偏移
/// - start < end，end 不超过文档长度
/// - content 为起始标记之后到 end 的子串（不含标记本身，
///   输出时由标题行代替标记文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSlice {
    name: ChapterName,
    title: Title,
    start: usize,
    end: usize,
    content: String,
    boundary: EndBoundary,
}

impl ChapterSlice {
    pub fn new(
        name: ChapterName,
        title: Title,
        start: usize,
        end: usize,
        content: String,
        boundary: EndBoundary,
    ) -> Result<Self, &'static str> {
        if start >= end {
            return Err("章节起始偏移必须小于结束偏移");
        }
        Ok(Self {
            name,
            title,
            start,
            end,
            content,
            boundary,
        })
    }

    pub fn name(&self) -> &ChapterName {
        &self.name
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn boundary(&self) -> EndBoundary {
        self.boundary
    }
}

/// 校验章节描述列表
///
/// 规则:
/// - 列表非空
/// - 章节名唯一（输出文件名不可冲突）
pub fn validate_specs(specs: &[ChapterSpec]) -> Result<(), ChapterError> {
    if specs.is_empty() {
        return Err(ChapterError::EmptySpecList);
    }

    let mut seen = HashSet::new();
    for spec in specs {
        if !seen.insert(spec.name().as_str()) {
            return Err(ChapterError::DuplicateName(spec.name().to_string()));
        }
    }

    Ok(())
}
