//! 命令处理器

mod split_handlers;

pub use split_handlers::SplitRulebookHandler;
