//! # batch 子命令 CLI 定义
//!
//! 批量估算一个目录下的用量文件（例如每个学生一份）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use crate::models::{GridType, ModelTier};

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing usage CSV files
    pub input: PathBuf,

    /// Glob pattern(s) for usage files, comma separated
    #[arg(long, default_value = "*.csv")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// AI model efficiency tier
    #[arg(short, long, value_enum, default_value_t = ModelTier::LessEfficient)]
    pub tier: ModelTier,

    /// Electricity grid type of the data center
    #[arg(short, long, value_enum, default_value_t = GridType::Mixed)]
    pub grid: GridType,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Save one summary row per usage file to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,
}
