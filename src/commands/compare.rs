//! # compare 命令实现
//!
//! 同一份用量在全部 模型档位 × 电网 组合下的估算结果。
//!
//! ## 依赖关系
//! - 使用 `cli/compare.rs` 定义的参数
//! - 使用 `engine/compare.rs`
//! - 使用 `utils/output.rs`

use crate::cli::compare::CompareArgs;
use crate::engine::compare::BASELINE;
use crate::engine::{compare_scenarios, CoefficientTables};
use crate::error::Result;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Model")]
    tier: String,
    #[tabled(rename = "Grid")]
    grid: String,
    #[tabled(rename = "Energy (kWh)")]
    energy: String,
    #[tabled(rename = "CO₂ (kg)")]
    carbon: String,
    #[tabled(rename = "Water (L)")]
    water: String,
    #[tabled(rename = "vs. default")]
    ratio: String,
}

/// 执行 compare 命令
pub fn execute(args: CompareArgs, tables: &CoefficientTables) -> Result<()> {
    output::print_header("Model and Grid Comparison");

    let profile =
        parsers::resolve_profile(args.usage.usage_file.as_deref(), &args.usage.entries)?;

    if profile.is_empty() {
        output::print_warning("All quantities are zero, nothing to compare.");
        return Ok(());
    }

    output::print_info(&format!(
        "Profile '{}', relative to {} model on {}",
        profile.name,
        BASELINE.0.name(),
        BASELINE.1.name()
    ));

    let scenarios = compare_scenarios(tables, &profile);

    let rows: Vec<ScenarioRow> = scenarios
        .iter()
        .map(|s| ScenarioRow {
            tier: s.tier.name().to_string(),
            grid: s.grid.name().to_string(),
            energy: format!("{:.4}", s.total.energy_kwh),
            carbon: format!("{:.4}", s.total.carbon_kg),
            water: format!("{:.2}", s.total.water_liters),
            ratio: format!("{:.0}%", s.carbon_ratio * 100.0),
        })
        .collect();

    println!("{}", Table::new(&rows));

    if let Some(best) = scenarios
        .iter()
        .min_by(|a, b| a.total.carbon_kg.total_cmp(&b.total.carbon_kg))
    {
        output::print_success(&format!(
            "Lowest emissions: {} model on {} ({:.4} kg CO₂)",
            best.tier.name(),
            best.grid.name(),
            best.total.carbon_kg
        ));
    }

    output::print_disclaimer();
    Ok(())
}
