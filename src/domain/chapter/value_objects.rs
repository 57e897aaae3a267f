//! Chapter Context - Value Objects

use serde::{Deserialize, Serialize};

/// 章节名
///
/// 用作输出文件名（不含扩展名），因此不允许路径分隔符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterName(String);

impl ChapterName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("章节名不能为空");
        }
        if name.contains('/') || name.contains('\\') {
            return Err("章节名不能包含路径分隔符");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 输出文件名（加 .md 扩展名）
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl std::fmt::Display for ChapterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 章节标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err("标题不能为空");
        }
        if title.contains('\n') {
            return Err("标题不能包含换行");
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 边界标记 - 用于定位章节边界的字面量子串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker(String);

impl Marker {
    pub fn new(marker: impl Into<String>) -> Result<Self, &'static str> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err("标记不能为空");
        }
        Ok(Self(marker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 标记的字节长度
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
