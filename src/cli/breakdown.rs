//! # breakdown 子命令 CLI 定义
//!
//! 各任务类型单次调用的相对影响占比。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/breakdown.rs`

use crate::models::{BreakdownMode, GridType};

use clap::Args;
use std::path::PathBuf;

/// breakdown 子命令参数
#[derive(Args, Debug)]
pub struct BreakdownArgs {
    /// Compare by energy or by carbon emissions
    #[arg(short, long, value_enum, default_value_t = BreakdownMode::Carbon)]
    pub mode: BreakdownMode,

    /// Grid type used for carbon mode
    #[arg(short, long, value_enum, default_value_t = GridType::Mixed)]
    pub grid: GridType,

    /// Save the breakdown to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Save a bar chart (PNG or SVG, by extension)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
