//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `estimate`: 估算一份用量的影响、等效量和时间预测
//! - `breakdown`: 各任务类型单次影响占比
//! - `compare`: 模型档位 × 电网情景对比
//! - `tables`: 打印当前系数表
//! - `batch`: 批量估算目录下的用量文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: estimate, breakdown, compare, batch

pub mod batch;
pub mod breakdown;
pub mod compare;
pub mod estimate;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// aifootprint - AI 使用环境影响估算工具
#[derive(Parser)]
#[command(name = "aifootprint")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Estimate the energy, carbon and water footprint of everyday AI use",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// CSV file overriding coefficient tables (columns: table,key,value)
    #[arg(long, global = true, env = "AIFOOTPRINT_COEFFICIENTS")]
    pub coefficients: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Estimate energy, carbon and water for a usage profile
    Estimate(estimate::EstimateArgs),

    /// Compare relative impact of each task type
    Breakdown(breakdown::BreakdownArgs),

    /// Compare every model tier and grid type for the same usage
    Compare(compare::CompareArgs),

    /// Print the active coefficient tables
    Tables,

    /// Estimate every usage file in a directory
    Batch(batch::BatchArgs),
}

/// 用量输入（多个子命令共用）
#[derive(Args, Debug)]
pub struct UsageInput {
    /// Usage entry TASK=QUANTITY, repeatable (e.g. --use text=20 --use images=3)
    #[arg(short = 'u', long = "use", value_name = "TASK=QTY")]
    pub entries: Vec<String>,

    /// CSV file with columns task,quantity
    #[arg(short = 'f', long)]
    pub usage_file: Option<PathBuf>,
}
