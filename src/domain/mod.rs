//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Chapter Context: 章节描述与章节切片

pub mod chapter;

// 章节分割器（核心算法）
mod splitter;

pub use splitter::{split_document, SkipReason, SkippedChapter, SplitOutcome, TruncatedChapter};
