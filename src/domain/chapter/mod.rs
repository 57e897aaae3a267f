//! Chapter Context - 章节限界上下文
//!
//! 包含章节描述（ChapterSpec）、章节切片（ChapterSlice）及相关值对象

mod entities;
mod errors;
mod value_objects;

pub use entities::{validate_specs, ChapterSlice, ChapterSpec, EndBoundary};
pub use errors::ChapterError;
pub use value_objects::{ChapterName, Marker, Title};
