//! # estimate 命令实现
//!
//! 估算一份 AI 用量的环境影响并输出到终端。
//!
//! ## 功能
//! - 总能耗、碳排放、水耗
//! - 生活化等效量（距离按所选单位显示）
//! - 一周 / 一月 / 一学期预测
//! - 任务明细与相对占比表格
//! - 可选 CSV 导出与占比柱状图
//!
//! ## 依赖关系
//! - 使用 `cli/estimate.rs` 定义的参数
//! - 使用 `engine/` 完成全部计算，`parsers/` 读取用量
//! - 使用 `utils/output.rs`

use crate::cli::estimate::EstimateArgs;
use crate::engine::{
    compute_equivalencies, compute_projections, compute_usage, export, plot, profile_breakdown,
    to_display_distance, CoefficientTables,
};
use crate::error::Result;
use crate::models::{BreakdownMode, DistanceUnit, Projection, UsageReport};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 任务明细行
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Energy (kWh)")]
    energy: String,
    #[tabled(rename = "CO₂ (kg)")]
    carbon: String,
    #[tabled(rename = "Water (L)")]
    water: String,
    #[tabled(rename = "Share (%)")]
    share: String,
}

/// 预测行
#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Uses")]
    uses: String,
    #[tabled(rename = "CO₂ (kg)")]
    carbon: String,
    #[tabled(rename = "Distance Driven")]
    distance: String,
    #[tabled(rename = "Tree months")]
    tree_months: String,
    #[tabled(rename = "Phone charges")]
    phone_charges: String,
    #[tabled(rename = "Showers")]
    showers: String,
    #[tabled(rename = "Bulb hours")]
    lightbulb_hours: String,
}

/// 执行 estimate 命令
pub fn execute(args: EstimateArgs, tables: &CoefficientTables) -> Result<()> {
    output::print_header("AI Environmental Impact Estimate");

    let profile =
        parsers::resolve_profile(args.usage.usage_file.as_deref(), &args.usage.entries)?;

    // 先完成全部计算，输入非法时不输出半份结果
    let report = compute_usage(tables, &profile, args.tier, args.grid);
    let projections = compute_projections(tables, &report.total, args.frequency)?;

    if report.lines.is_empty() {
        output::print_warning("All quantities are zero, nothing to estimate.");
        return Ok(());
    }

    output::print_info(&format!(
        "Profile '{}': {} model, {} ({} gCO₂/kWh)",
        profile.name,
        args.tier.name(),
        args.grid.name(),
        tables.carbon_intensity(args.grid)
    ));
    output::print_info(&format!(
        "{}: {} (e.g. {})",
        args.grid.name(),
        args.grid.description(),
        args.grid.examples()
    ));

    print_totals(tables, &report, args.unit);
    print_task_table(&report, args.mode);
    print_projection_table(tables, &projections, args.unit);

    if let Some(ref path) = args.output_csv {
        export::report_to_csv(&report, path)?;
        output::print_success(&format!("Per-task results saved to '{}'", path.display()));
    }

    if let Some(ref path) = args.plot {
        let entries = profile_breakdown(&report, args.mode);
        let title = format!("Relative Impact Breakdown ({})", args.mode);
        plot::generate_breakdown_plot(&entries, args.mode, path, &title, Default::default())?;
        output::print_success(&format!("Breakdown chart saved to '{}'", path.display()));
    }

    output::print_disclaimer();
    Ok(())
}

/// 打印总量与等效量
fn print_totals(tables: &CoefficientTables, report: &UsageReport, unit: DistanceUnit) {
    let total = &report.total;
    let eq = compute_equivalencies(tables, total);

    output::print_header("Environmental Impact Results");
    output::print_metric("Energy Used", &format!("{:.4}", total.energy_kwh), "kWh");
    output::print_metric("Carbon Emissions", &format!("{:.4}", total.carbon_kg), "kg CO₂");
    output::print_metric("Water Used", &format!("{:.2}", total.water_liters), "L");

    output::print_header("Impact Equivalencies");
    output::print_metric("Distance Driven", &format_distance(tables, eq.distance_km, unit), "");
    output::print_metric("Tree Absorption", &format!("{:.1}", eq.tree_months), "months");
    output::print_metric("Phone Charges", &format!("{:.1}", eq.phone_charges), "charges");
    output::print_metric("Showers", &format!("{:.1}", eq.showers), "showers");
    output::print_metric("Lightbulb", &format!("{:.1}", eq.lightbulb_hours), "hours");
}

/// 打印任务明细
fn print_task_table(report: &UsageReport, mode: BreakdownMode) {
    let shares = profile_breakdown(report, mode);

    let rows: Vec<TaskRow> = report
        .lines
        .iter()
        .map(|line| {
            let share = shares
                .iter()
                .find(|e| e.task == line.task)
                .map(|e| format!("{:.1}", e.share * 100.0))
                .unwrap_or_else(|| "-".to_string());
            TaskRow {
                task: line.task.name().to_string(),
                quantity: format!("{} {}", line.quantity, line.task.unit()),
                energy: format!("{:.5}", line.impact.energy_kwh),
                carbon: format!("{:.5}", line.impact.carbon_kg),
                water: format!("{:.2}", line.impact.water_liters),
                share,
            }
        })
        .collect();

    output::print_header(&format!("Task Breakdown (share by {})", mode));
    println!("{}", Table::new(&rows));
}

/// 打印时间预测
fn print_projection_table(tables: &CoefficientTables, projections: &[Projection], unit: DistanceUnit) {
    let rows: Vec<ProjectionRow> = projections
        .iter()
        .map(|p| {
            let eq = &p.scaled_equivalencies;
            ProjectionRow {
                period: p.period.to_string(),
                uses: format!("{}", p.scale_factor()),
                carbon: format!("{:.4}", p.scaled_result.carbon_kg),
                distance: format_distance(tables, eq.distance_km, unit),
                tree_months: format!("{:.1}", eq.tree_months),
                phone_charges: format!("{:.1}", eq.phone_charges),
                showers: format!("{:.1}", eq.showers),
                lightbulb_hours: format!("{:.1}", eq.lightbulb_hours),
            }
        })
        .collect();

    let frequency = projections.first().map(|p| p.daily_frequency).unwrap_or(1);
    output::print_header(&format!("Time-Based Projections ({}× per day)", frequency));
    println!("{}", Table::new(&rows));
}

/// 按显示单位格式化行驶距离，例如 `4.2 miles`
fn format_distance(tables: &CoefficientTables, km: f64, unit: DistanceUnit) -> String {
    format!("{:.1} {}", to_display_distance(tables, km, unit), unit.label())
}
