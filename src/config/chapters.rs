//! Chapter Table Loading - 章节表加载
//!
//! 章节表来源:
//! 1. `input.chapters_file` 指定的 TOML 文件（[[chapter]] 数组）
//! 2. 未指定时使用内置章节表（原始 WFRP 4e 俄文版规则书的 12 个章节）

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::loader::ConfigError;
use crate::domain::chapter::{validate_specs, ChapterName, ChapterSpec, Marker, Title};

/// 内置章节表
///
/// (name, title, start_marker, end_marker)；结束标记仅对最后一章生效。
/// 部分起始标记跨行，用于区分正文中重复出现的章节标题文本。
const DEFAULT_CHAPTERS: &[(&str, &str, &str, Option<&str>)] = &[
    ("01_введение", "ВВЕДЕНИЕ", "ВВЕДЕНИЕ", None),
    ("02_персонаж", "ПЕРСОНАЖ", "СОЗДАНИЕ ПЕРСОНАЖА", None),
    ("03_классы_и_карьеры", "КЛАССЫ И КАРЬЕРЫ", "КЛАССЫ\nБюргеры:", None),
    ("04_навыки_и_таланты", "НАВЫКИ И ТАЛАНТЫ", "НАВЫКИ И ТАЛАНТЫ", None),
    (
        "05_правила",
        "ПРАВИЛА",
        "ПРАВИЛА\nТочно подобранное название",
        None,
    ),
    (
        "06_между_приключениями",
        "МЕЖДУ ПРИКЛЮЧЕНИЯМИ",
        "МЕЖДУ ПРИКЛЮЧЕНИЯМИ",
        None,
    ),
    ("07_религия_и_вера", "РЕЛИГИЯ И ВЕРА", "РЕЛИГИЯ И ВЕРА", None),
    ("08_магия", "МАГИЯ", "МАГИЯ\nЛишь злонамеренный", None),
    ("09_ведущий", "ВЕДУЩИЙ", "ВЕДУЩИЙ", None),
    (
        "10_славный_рейкланд",
        "СЛАВНЫЙ РЕЙКЛАНД",
        "СЛАВНЫЙ РЕЙКЛАНД",
        None,
    ),
    (
        "11_руководство_покупателя",
        "РУКОВОДСТВО ПОКУПАТЕЛЯ",
        "РУКОВОДСТВО",
        None,
    ),
    (
        "12_бестиарий",
        "БЕСТИАРИЙ",
        "БЕСТИАРИЙ",
        Some("Бланк персонажа"),
    ),
];

/// 章节表文件条目（DTO）
#[derive(Debug, Clone, Deserialize)]
struct ChapterEntry {
    name: String,
    title: String,
    start_marker: String,
    #[serde(default)]
    end_marker: Option<String>,
}

/// 章节表文件结构
#[derive(Debug, Deserialize)]
struct ChaptersFile {
    chapter: Vec<ChapterEntry>,
}

/// 从 TOML 文件加载章节表
pub fn load_chapter_specs(path: &Path) -> Result<Vec<ChapterSpec>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| {
        ConfigError::LoadError(format!("Failed to read chapters file {}: {}", path.display(), e))
    })?;
    parse_chapter_specs(&text)
}

/// 内置章节表
pub fn default_chapter_specs() -> Result<Vec<ChapterSpec>, ConfigError> {
    let specs = DEFAULT_CHAPTERS
        .iter()
        .map(|(name, title, start, end)| build_spec(name, title, start, *end))
        .collect::<Result<Vec<_>, _>>()?;

    validate_specs(&specs).map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(specs)
}

/// 解析章节表 TOML 文本
fn parse_chapter_specs(text: &str) -> Result<Vec<ChapterSpec>, ConfigError> {
    let file: ChaptersFile = toml::from_str(text)
        .map_err(|e| ConfigError::ParseError(format!("Failed to parse chapters file: {}", e)))?;

    let specs = file
        .chapter
        .iter()
        .map(|entry| {
            build_spec(
                &entry.name,
                &entry.title,
                &entry.start_marker,
                entry.end_marker.as_deref(),
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_specs(&specs).map_err(|e| ConfigError::ValidationError(e.to_string()))?;
    Ok(specs)
}

fn build_spec(
    name: &str,
    title: &str,
    start_marker: &str,
    end_marker: Option<&str>,
) -> Result<ChapterSpec, ConfigError> {
    let invalid = |e: &str| ConfigError::ValidationError(format!("chapter '{}': {}", name, e));

    let chapter_name = ChapterName::new(name).map_err(invalid)?;
    let title = Title::new(title).map_err(invalid)?;
    let start_marker = Marker::new(start_marker).map_err(invalid)?;
    let end_marker = end_marker.map(Marker::new).transpose().map_err(invalid)?;

    Ok(ChapterSpec::new(chapter_name, title, start_marker, end_marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chapter_specs() {
        let specs = default_chapter_specs().unwrap();
        assert_eq!(specs.len(), 12);
        assert_eq!(specs[0].name().as_str(), "01_введение");
        // 只有最后一章声明结束标记
        assert!(specs[..11].iter().all(|s| s.end_marker().is_none()));
        assert_eq!(
            specs[11].end_marker().unwrap().as_str(),
            "Бланк персонажа"
        );
    }

    #[test]
    fn test_parse_chapter_specs() {
        let text = r#"
[[chapter]]
name = "01_intro"
title = "Introduction"
start_marker = "INTRODUCTION"

[[chapter]]
name = "02_rules"
title = "Rules"
start_marker = "RULES\nThe rules chapter"
end_marker = "APPENDIX"
"#;
        let specs = parse_chapter_specs(text).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name().as_str(), "01_intro");
        assert!(specs[0].end_marker().is_none());
        // TOML 基本字符串中的 \n 转义得到跨行标记
        assert_eq!(
            specs[1].start_marker().as_str(),
            "RULES\nThe rules chapter"
        );
        assert_eq!(specs[1].end_marker().unwrap().as_str(), "APPENDIX");
    }

    #[test]
    fn test_parse_rejects_duplicate_names() {
        let text = r#"
[[chapter]]
name = "01_intro"
title = "Introduction"
start_marker = "A"

[[chapter]]
name = "01_intro"
title = "Other"
start_marker = "B"
"#;
        let result = parse_chapter_specs(text);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_parse_rejects_empty_marker() {
        let text = r#"
[[chapter]]
name = "01_intro"
title = "Introduction"
start_marker = ""
"#;
        let result = parse_chapter_specs(text);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_toml() {
        let result = parse_chapter_specs("not toml at all [");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_chapter_specs_missing_file() {
        let result = load_chapter_specs(Path::new("no/such/chapters.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_chapter_specs_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("chapters.toml");
        std::fs::write(
            &path,
            r#"
[[chapter]]
name = "01_intro"
title = "Introduction"
start_marker = "INTRODUCTION"
"#,
        )
        .unwrap();

        let specs = load_chapter_specs(&path).unwrap();
        assert_eq!(specs.len(), 1);
    }
}
