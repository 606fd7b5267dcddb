//! # 美化输出工具
//!
//! 提供统一的终端输出样式。所有用户可见的状态信息都经由这里输出，
//! 错误写到 stderr，其余写到 stdout。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印一项指标，例如 `Energy Used   0.0123 kWh`
pub fn print_metric(label: &str, value: &str, unit: &str) {
    println!("  {:<22} {} {}", label.dimmed(), value.bold(), unit);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印演示用途提示
pub fn print_disclaimer() {
    println!(
        "\n{} {}",
        "[!]".yellow(),
        "Estimates for learning only. Real impact depends on provider, data center and local grid."
            .dimmed()
    );
}
