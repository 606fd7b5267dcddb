//! # estimate 子命令 CLI 定义
//!
//! 单份用量估算：总量、等效量、时间预测、任务明细与占比。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/estimate.rs`

use super::UsageInput;
use crate::models::{BreakdownMode, DistanceUnit, GridType, ModelTier};

use clap::Args;
use std::path::PathBuf;

/// estimate 子命令参数
#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub usage: UsageInput,

    /// AI model efficiency tier
    #[arg(short, long, value_enum, default_value_t = ModelTier::LessEfficient)]
    pub tier: ModelTier,

    /// Electricity grid type of the data center
    #[arg(short, long, value_enum, default_value_t = GridType::Mixed)]
    pub grid: GridType,

    /// How many times per day this usage is repeated (for projections)
    #[arg(long, default_value_t = 1)]
    pub frequency: u32,

    /// Distance unit for the driving equivalency
    #[arg(long, value_enum, default_value_t = DistanceUnit::Kilometers)]
    pub unit: DistanceUnit,

    /// Quantity used for the relative impact breakdown
    #[arg(long, value_enum, default_value_t = BreakdownMode::Carbon)]
    pub mode: BreakdownMode,

    /// Save per-task results to a CSV file
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Save the relative impact breakdown as a bar chart (PNG or SVG)
    #[arg(long)]
    pub plot: Option<PathBuf>,
}
