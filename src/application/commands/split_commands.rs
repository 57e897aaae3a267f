//! Split Commands - 分割命令定义

use std::path::PathBuf;

use crate::domain::{SkippedChapter, TruncatedChapter};

/// 分割规则书命令
#[derive(Debug, Clone)]
pub struct SplitRulebook {
    /// 输入文档路径
    pub input_path: PathBuf,
}

/// 已写出的章节
#[derive(Debug, Clone)]
pub struct WrittenChapter {
    pub name: String,
    pub title: String,
    pub path: PathBuf,
    /// 切片内容的字节数（不含标题行）
    pub content_bytes: usize,
}

/// 分割命令响应
#[derive(Debug, Clone)]
pub struct SplitRulebookResponse {
    /// 按章节表顺序写出的章节
    pub written: Vec<WrittenChapter>,
    /// 起始标记缺失而跳过的章节
    pub skipped: Vec<SkippedChapter>,
    /// 结束边界缺失而截断的章节
    pub truncated: Vec<TruncatedChapter>,
    /// 索引文件路径
    pub index_path: PathBuf,
    /// 清单文件路径
    pub manifest_path: PathBuf,
}
