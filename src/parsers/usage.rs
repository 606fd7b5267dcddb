//! # 用量文件解析器
//!
//! 读取用量 CSV 以及命令行中的 `TASK=QTY` 条目。
//!
//! ## 格式
//! ```text
//! task,quantity
//! text-generation,20
//! images,3
//! video,0.5
//! ```
//! - 任务键名接受别名（text, images, coding, video, audio, analysis, research）
//! - 同一任务多行时累加
//! - 以 `#` 开头的行视为注释
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs`, `commands/batch.rs` 调用
//! - 使用 `models/usage.rs` 的 UsageProfile
//! - 使用 `csv` + `serde` 解析，`regex` 解析命令行条目

use crate::error::{FootprintError, Result};
use crate::models::{TaskType, UsageProfile};

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// CSV 行
#[derive(Debug, Deserialize)]
struct UsageRow {
    task: String,
    quantity: f64,
}

/// 解析用量文件
pub fn parse_usage_file(path: &Path) -> Result<UsageProfile> {
    let content = fs::read_to_string(path).map_err(|e| FootprintError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("usage")
        .to_string();

    // 非法用量保持原类别，其余归为文件格式错误
    parse_usage_content(&content, &name).map_err(|e| match e {
        FootprintError::InvalidInput(_) => e,
        other => FootprintError::ParseError {
            format: "usage".to_string(),
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    })
}

/// 解析用量 CSV 文本
pub fn parse_usage_content(content: &str, name: &str) -> Result<UsageProfile> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.trim().as_bytes());

    let mut profile = UsageProfile::new(name);

    for (i, row) in rdr.deserialize::<UsageRow>().enumerate() {
        let row = row?;
        let task: TaskType = row.task.parse().map_err(|e: FootprintError| {
            FootprintError::InvalidArgument(format!("row {}: {}", i + 1, e))
        })?;
        profile.add(task, row.quantity)?;
    }

    Ok(profile)
}

fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z][A-Za-z_-]*)\s*[=:]\s*([0-9]*\.?[0-9]+(?:[eE][+-]?[0-9]+)?)\s*$")
            .expect("usage entry pattern is valid")
    })
}

/// 解析命令行条目 `TASK=QTY`（也接受 `TASK:QTY`）
pub fn parse_usage_entry(entry: &str) -> Result<(TaskType, f64)> {
    let caps = entry_pattern().captures(entry).ok_or_else(|| {
        FootprintError::InvalidArgument(format!(
            "Invalid usage entry '{}'. Expected TASK=QUANTITY, e.g. text=20",
            entry
        ))
    })?;

    let task: TaskType = caps[1].parse()?;
    let quantity: f64 = caps[2].parse().map_err(|_| {
        FootprintError::InvalidArgument(format!("Invalid quantity in '{}'", entry))
    })?;

    Ok((task, quantity))
}

/// 由多个命令行条目构造用量
pub fn profile_from_entries(entries: &[String], name: &str) -> Result<UsageProfile> {
    let mut profile = UsageProfile::new(name);
    for entry in entries {
        let (task, quantity) = parse_usage_entry(entry)?;
        profile.add(task, quantity)?;
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_usage_basic() {
        let content = r#"
task,quantity
# one school week
text-generation,20
images,3
video, 0.5
text,5
"#;
        let profile = parse_usage_content(content, "week").unwrap();
        assert_eq!(profile.name, "week");
        assert_eq!(profile.quantity(TaskType::TextGeneration), 25.0);
        assert_eq!(profile.quantity(TaskType::ImageGeneration), 3.0);
        assert_eq!(profile.quantity(TaskType::VideoGeneration), 0.5);
    }

    #[test]
    fn test_parse_usage_unknown_task() {
        let content = "task,quantity\nspreadsheets,4\n";
        assert!(parse_usage_content(content, "bad").is_err());
    }

    #[test]
    fn test_parse_usage_negative_quantity() {
        let content = "task,quantity\ncoding,-2\n";
        let err = parse_usage_content(content, "bad").unwrap_err();
        assert!(matches!(err, FootprintError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_usage_bad_number() {
        let content = "task,quantity\ncoding,many\n";
        assert!(matches!(
            parse_usage_content(content, "bad"),
            Err(FootprintError::CsvError(_))
        ));
    }

    #[test]
    fn test_parse_usage_file_error_categories() {
        let dir = std::env::temp_dir().join("aifootprint-usage-file");
        std::fs::create_dir_all(&dir).unwrap();

        let negative = dir.join("negative.csv");
        std::fs::write(&negative, "task,quantity\nimages,-4\n").unwrap();
        assert!(matches!(
            parse_usage_file(&negative),
            Err(FootprintError::InvalidInput(_))
        ));

        let malformed = dir.join("malformed.csv");
        std::fs::write(&malformed, "task,quantity\nimages,lots\n").unwrap();
        assert!(matches!(
            parse_usage_file(&malformed),
            Err(FootprintError::ParseError { .. })
        ));

        let good = dir.join("good.csv");
        std::fs::write(&good, "task,quantity\nimages,4\n").unwrap();
        let profile = parse_usage_file(&good).unwrap();
        assert_eq!(profile.name, "good");
        assert_eq!(profile.quantity(TaskType::ImageGeneration), 4.0);
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_usage_entry("text=20").unwrap(),
            (TaskType::TextGeneration, 20.0)
        );
        assert_eq!(
            parse_usage_entry(" deep-research : 1.5 ").unwrap(),
            (TaskType::DeepResearch, 1.5)
        );
        assert!(parse_usage_entry("text").is_err());
        assert!(parse_usage_entry("text=-3").is_err());
        assert!(parse_usage_entry("podcast=3").is_err());
    }

    #[test]
    fn test_profile_from_entries() {
        let entries = vec!["images=2".to_string(), "images=1".to_string()];
        let profile = profile_from_entries(&entries, "cli").unwrap();
        assert_eq!(profile.quantity(TaskType::ImageGeneration), 3.0);
    }
}
