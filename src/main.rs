//! Rulesplit - 规则书章节分割工具
//!
//! 用法: rulesplit [document] [output_dir]
//! 位置参数覆盖配置文件/环境变量中的对应项。

use std::path::PathBuf;
use std::sync::Arc;

use rulesplit::application::{SplitRulebook, SplitRulebookHandler};
use rulesplit::config::{default_chapter_specs, load_chapter_specs, load_config, print_config};
use rulesplit::infrastructure::{
    FileChapterWriter, FileChapterWriterConfig, FileDocumentSource,
};

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let mut config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 位置参数覆盖: rulesplit [document] [output_dir]
    let mut args = std::env::args().skip(1);
    if let Some(document) = args.next() {
        config.input.document = PathBuf::from(document);
    }
    if let Some(output_dir) = args.next() {
        config.output.dir = PathBuf::from(output_dir);
    }

    // 初始化日志
    let log_filter = format!("{},rulesplit={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Rulesplit - 规则书章节分割工具");
    print_config(&config);

    // 加载章节表
    let specs = match &config.input.chapters_file {
        Some(path) => load_chapter_specs(path)
            .map_err(|e| anyhow::anyhow!("Failed to load chapters file: {}", e))?,
        None => default_chapter_specs()
            .map_err(|e| anyhow::anyhow!("Failed to build chapter preset: {}", e))?,
    };
    tracing::info!("Chapter table loaded: {} chapters", specs.len());

    // 创建适配器
    let source = Arc::new(FileDocumentSource::new());
    let writer = Arc::new(FileChapterWriter::new(FileChapterWriterConfig {
        output_dir: config.output.dir.clone(),
        index_title: config.output.index_title.clone(),
    })?);

    // 执行分割
    let handler = SplitRulebookHandler::new(specs, source, writer);
    let response = handler.handle(SplitRulebook {
        input_path: config.input.document.clone(),
    })?;

    // 运行摘要
    for chapter in &response.written {
        tracing::info!(
            "Chapter file: {} ({} bytes)",
            chapter.path.display(),
            chapter.content_bytes
        );
    }
    tracing::info!("Index: {}", response.index_path.display());
    tracing::info!("Manifest: {}", response.manifest_path.display());
    tracing::info!(
        "Done: {} chapters written to {} ({} skipped, {} truncated)",
        response.written.len(),
        config.output.dir.display(),
        response.skipped.len(),
        response.truncated.len()
    );

    Ok(())
}
