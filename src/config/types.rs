//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 输入配置
    #[serde(default)]
    pub input: InputConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 输入配置
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// 规则书文档路径（UTF-8 文本）
    #[serde(default = "default_document")]
    pub document: PathBuf,

    /// 章节表文件路径（TOML，[[chapter]] 数组）
    /// 未设置时使用内置 WFRP 4e 章节表
    #[serde(default)]
    pub chapters_file: Option<PathBuf>,
}

fn default_document() -> PathBuf {
    PathBuf::from("WFRPG4E.ru.md")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            chapters_file: None,
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 章节文件输出目录
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// 索引文件（README.md）顶部标题
    #[serde(default = "default_index_title")]
    pub index_title: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("rules")
}

fn default_index_title() -> String {
    "Правила WFRP 4e".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            index_title: default_index_title(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
