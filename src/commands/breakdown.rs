//! # breakdown 命令实现
//!
//! 各任务类型单次调用的相对影响占比，对应界面上的堆叠占比条。
//!
//! ## 依赖关系
//! - 使用 `cli/breakdown.rs` 定义的参数
//! - 使用 `engine/breakdown.rs`, `engine/export.rs`, `engine/plot.rs`
//! - 使用 `utils/output.rs`

use crate::cli::breakdown::BreakdownArgs;
use crate::engine::plot::{self, ChartSize};
use crate::engine::{compute_breakdown, export, CoefficientTables};
use crate::error::Result;
use crate::models::BreakdownMode;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Share (%)")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// 执行 breakdown 命令
pub fn execute(args: BreakdownArgs, tables: &CoefficientTables) -> Result<()> {
    output::print_header("Relative Impact by Task Type");

    let entries = compute_breakdown(tables, args.mode, args.grid);

    match args.mode {
        BreakdownMode::Energy => {
            output::print_info("Comparing energy per task, independent of model and grid")
        }
        BreakdownMode::Carbon => output::print_info(&format!(
            "Comparing carbon per task on a {} ({} gCO₂/kWh)",
            args.grid.name(),
            tables.carbon_intensity(args.grid)
        )),
    }

    let unit = match args.mode {
        BreakdownMode::Energy => "kWh",
        BreakdownMode::Carbon => "kg CO₂",
    };

    let rows: Vec<BreakdownRow> = entries
        .iter()
        .map(|e| BreakdownRow {
            task: e.task.name().to_string(),
            value: format!("{:.6} {}", e.value, unit),
            share: format!("{:.1}", e.share * 100.0),
            bar: "█".repeat((e.share * 40.0).round() as usize),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if let Some(ref path) = args.output_csv {
        export::breakdown_to_csv(&entries, path)?;
        output::print_success(&format!("Breakdown saved to '{}'", path.display()));
    }

    if let Some(ref path) = args.plot {
        let size = ChartSize {
            width: args.width,
            height: args.height,
        };
        let title = format!("Relative Impact by Task Type ({})", args.mode);
        plot::generate_breakdown_plot(&entries, args.mode, path, &title, size)?;
        output::print_success(&format!("Breakdown chart saved to '{}'", path.display()));
    }

    Ok(())
}
