//! # compare 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compare.rs`

use super::UsageInput;

use clap::Args;

/// compare 子命令参数
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub usage: UsageInput,
}
