//! 应用层命令

pub mod handlers;

mod split_commands;

pub use split_commands::{SplitRulebook, SplitRulebookResponse, WrittenChapter};
