//! # tables 命令实现
//!
//! 打印当前生效的系数表（默认值或覆盖文件合并后的结果）。
//!
//! ## 依赖关系
//! - 使用 `engine/tables.rs`
//! - 使用 `utils/output.rs`

use crate::engine::{CoefficientTables, Constant};
use crate::error::Result;
use crate::models::{GridType, ModelTier, TaskType};
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Task")]
    name: &'static str,
    #[tabled(rename = "Energy (kWh)")]
    energy: String,
    #[tabled(rename = "Per")]
    unit: &'static str,
}

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Model")]
    name: &'static str,
    #[tabled(rename = "Efficiency factor")]
    factor: String,
}

#[derive(Tabled)]
struct GridRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Grid")]
    name: &'static str,
    #[tabled(rename = "gCO₂/kWh")]
    intensity: String,
    #[tabled(rename = "Examples")]
    examples: &'static str,
}

#[derive(Tabled)]
struct ConstantRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: &'static str,
}

/// 执行 tables 命令
pub fn execute(tables: &CoefficientTables) -> Result<()> {
    output::print_header("Task Energy");
    let rows: Vec<TaskRow> = TaskType::ALL
        .iter()
        .map(|&task| TaskRow {
            key: task.key(),
            name: task.name(),
            energy: format!("{}", tables.base_energy(task)),
            unit: task.unit(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_header("Model Efficiency");
    let rows: Vec<TierRow> = ModelTier::ALL
        .iter()
        .map(|&tier| TierRow {
            key: tier.key(),
            name: tier.name(),
            factor: format!("{}", tables.efficiency_factor(tier)),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_header("Grid Carbon Intensity");
    let rows: Vec<GridRow> = GridType::ALL
        .iter()
        .map(|&grid| GridRow {
            key: grid.key(),
            name: grid.name(),
            intensity: format!("{}", tables.carbon_intensity(grid)),
            examples: grid.examples(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_header("Conversion Constants");
    let rows: Vec<ConstantRow> = Constant::ALL
        .iter()
        .map(|&c| ConstantRow {
            key: c.key(),
            value: format!("{}", tables.constant(c)),
            unit: c.unit(),
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_separator();
    output::print_info("Override any value with --coefficients FILE (columns: table,key,value)");
    Ok(())
}
