//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。系数表在分发前加载一次，
//! 之后以只读引用传给各命令。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `engine/`, `utils/`
//! - 子模块: estimate, breakdown, compare, tables, batch

pub mod batch;
pub mod breakdown;
pub mod compare;
pub mod estimate;
pub mod tables;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::parsers;

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let coefficient_tables = parsers::load_tables(cli.coefficients.as_deref())?;

    match cli.command {
        Commands::Estimate(args) => estimate::execute(args, &coefficient_tables),
        Commands::Breakdown(args) => breakdown::execute(args, &coefficient_tables),
        Commands::Compare(args) => compare::execute(args, &coefficient_tables),
        Commands::Tables => tables::execute(&coefficient_tables),
        Commands::Batch(args) => batch::execute(args, &coefficient_tables),
    }
}
