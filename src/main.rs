//! # aifootprint - AI 使用环境影响估算工具
//!
//! 估算日常 AI 使用（文本、图像、代码、视频、音频、数据分析、深度研究）
//! 的能耗、碳排放和水耗，并换算成生活化的等效量。
//!
//! ## 子命令
//! - `estimate`  - 估算一份用量，含等效量与一周/一月/一学期预测
//! - `breakdown` - 各任务类型相对占比
//! - `compare`   - 模型档位 × 电网情景对比
//! - `tables`    - 打印当前系数表
//! - `batch`     - 批量估算用量文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (用量与系数解析)
//!   │     ├── engine/    (计算引擎)
//!   │     ├── batch/     (批量处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod engine;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
