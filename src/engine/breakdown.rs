//! # 相对占比
//!
//! 计算各任务类型的相对影响占比，用于对比图表。
//!
//! - `compute_breakdown`: 固定上下文下，每种任务单次调用的能耗或碳排放占比
//! - `profile_breakdown`: 一份用量报告中各任务行的占比
//!
//! 顺序始终为任务声明顺序，不按数值排序。每次调用重新计算。
//!
//! ## 依赖关系
//! - 被 `commands/breakdown.rs`, `commands/estimate.rs` 调用
//! - 结果可交给 `engine/plot.rs` 绘图

use crate::engine::CoefficientTables;
use crate::models::{BreakdownEntry, BreakdownMode, GridType, TaskType, UsageReport};

/// 任务类型间的单次影响占比
pub fn compute_breakdown(
    tables: &CoefficientTables,
    mode: BreakdownMode,
    grid: GridType,
) -> Vec<BreakdownEntry> {
    let values = TaskType::ALL.iter().map(|task| {
        let energy = tables.base_energy(*task);
        let value = match mode {
            BreakdownMode::Energy => energy,
            BreakdownMode::Carbon => energy * tables.carbon_intensity(grid) / 1000.0,
        };
        (*task, value)
    });

    with_shares(values.collect())
}

/// 用量报告中各任务行的占比；报告为空或总量为零时返回空序列
pub fn profile_breakdown(report: &UsageReport, mode: BreakdownMode) -> Vec<BreakdownEntry> {
    let values = report
        .lines
        .iter()
        .map(|line| (line.task, line.impact.value_for(mode)))
        .collect();

    with_shares(values)
}

fn with_shares(values: Vec<(TaskType, f64)>) -> Vec<BreakdownEntry> {
    let total: f64 = values.iter().map(|(_, v)| v).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    values
        .into_iter()
        .map(|(task, value)| BreakdownEntry {
            task,
            value,
            share: value / total,
        })
        .collect()
}
