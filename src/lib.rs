//! Rulesplit - 规则书章节分割工具
//!
//! 把一份大的 UTF-8 规则书文档按字面量标记切分为独立的章节文件，
//! 并生成导航索引与机读清单。
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Chapter Context: 章节描述、章节切片
//! - 章节分割器（纯函数，单调游标顺序扫描）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（DocumentSource, ChapterWriter）
//! - Commands: SplitRulebook 命令及处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 本地文件读入、章节/索引/清单写出

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
