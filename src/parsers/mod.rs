//! # 输入解析模块
//!
//! 解析用量文件、命令行用量条目和系数覆盖文件。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `engine/tables.rs`
//! - 子模块: usage, coefficients

pub mod coefficients;
pub mod usage;

pub use coefficients::load_tables;
pub use usage::{parse_usage_file, profile_from_entries};

use crate::error::{FootprintError, Result};
use crate::models::UsageProfile;

use std::path::Path;

/// 合并文件与命令行条目得到用量；二者都没有时报错
pub fn resolve_profile(file: Option<&Path>, entries: &[String]) -> Result<UsageProfile> {
    let mut profile = match file {
        Some(path) => {
            if !path.exists() {
                return Err(FootprintError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            parse_usage_file(path)?
        }
        None if entries.is_empty() => {
            return Err(FootprintError::InvalidArgument(
                "No usage given. Pass --use TASK=QTY (repeatable) or --usage-file".to_string(),
            ))
        }
        None => UsageProfile::new("command line"),
    };

    for (task, quantity) in profile_from_entries(entries, &profile.name)?.iter() {
        profile.add(task, quantity)?;
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskType;

    use std::fs;
    use std::path::PathBuf;

    fn usage_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("aifootprint-resolve");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_file_and_entries_merge() {
        let path = usage_file("monday.csv", "task,quantity\ntext,10\nimages,2\n");
        let entries = vec!["text=5".to_string(), "audio=1.5".to_string()];

        let profile = resolve_profile(Some(&path), &entries).unwrap();
        assert_eq!(profile.name, "monday");
        assert_eq!(profile.quantity(TaskType::TextGeneration), 15.0);
        assert_eq!(profile.quantity(TaskType::ImageGeneration), 2.0);
        assert_eq!(profile.quantity(TaskType::AudioGeneration), 1.5);
    }

    #[test]
    fn test_entries_only() {
        let entries = vec!["coding=3".to_string()];
        let profile = resolve_profile(None, &entries).unwrap();
        assert_eq!(profile.name, "command line");
        assert_eq!(profile.quantity(TaskType::CodeGeneration), 3.0);
    }

    #[test]
    fn test_no_usage_given() {
        assert!(matches!(
            resolve_profile(None, &[]),
            Err(FootprintError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_usage_file() {
        let path = Path::new("/nonexistent/usage.csv");
        assert!(matches!(
            resolve_profile(Some(path), &[]),
            Err(FootprintError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_oversized_entry_rejected() {
        let entries = vec!["video=1e308".to_string()];
        assert!(matches!(
            resolve_profile(None, &entries),
            Err(FootprintError::InvalidInput(_))
        ));
    }
}
