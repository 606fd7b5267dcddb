//! # 数据导出
//!
//! 导出估算报告、占比和批量汇总为 CSV。
//!
//! ## 支持格式
//! - 报告: task, quantity, energy_kwh, carbon_kg, water_liters（末行为 total）
//! - 占比: task, value, share
//! - 汇总: profile, tasks, energy_kwh, carbon_kg, water_liters
//!
//! 数值按完整精度写出，不做定长小数截断。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{FootprintError, Result};
use crate::models::{BreakdownEntry, UsageReport};

use std::path::Path;

/// 导出用量报告
pub fn report_to_csv(report: &UsageReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "task",
        "quantity",
        "energy_kwh",
        "carbon_kg",
        "water_liters",
    ])?;

    for line in &report.lines {
        wtr.write_record(&[
            line.task.key().to_string(),
            format!("{}", line.quantity),
            format!("{}", line.impact.energy_kwh),
            format!("{}", line.impact.carbon_kg),
            format!("{}", line.impact.water_liters),
        ])?;
    }

    wtr.write_record(&[
        "total".to_string(),
        String::new(),
        format!("{}", report.total.energy_kwh),
        format!("{}", report.total.carbon_kg),
        format!("{}", report.total.water_liters),
    ])?;

    flush(wtr, output_path)
}

/// 导出占比
pub fn breakdown_to_csv(entries: &[BreakdownEntry], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["task", "value", "share"])?;

    for entry in entries {
        wtr.write_record(&[
            entry.task.key().to_string(),
            format!("{}", entry.value),
            format!("{}", entry.share),
        ])?;
    }

    flush(wtr, output_path)
}

/// 导出批量汇总，每行一个用量文件
pub fn summary_to_csv(reports: &[(String, UsageReport)], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record([
        "profile",
        "tasks",
        "energy_kwh",
        "carbon_kg",
        "water_liters",
    ])?;

    for (name, report) in reports {
        wtr.write_record(&[
            name.clone(),
            report.lines.len().to_string(),
            format!("{}", report.total.energy_kwh),
            format!("{}", report.total.carbon_kg),
            format!("{}", report.total.water_liters),
        ])?;
    }

    flush(wtr, output_path)
}

fn flush(mut wtr: csv::Writer<std::fs::File>, output_path: &Path) -> Result<()> {
    wtr.flush().map_err(|e| FootprintError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}
