//! # 影响计算器
//!
//! 将任务基础能耗与模型效率、电网碳强度组合，得到单次使用的
//! 能耗、碳排放和水耗；并把一份用量汇总为报告。
//!
//! ## 公式
//! - energy = base_energy(task) × efficiency_factor(tier)
//! - carbon = energy × carbon_intensity(grid) / 1000
//! - water  = energy × water_per_kwh
//!
//! 内部不做任何舍入，舍入属于展示层。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `engine/tables.rs`

use crate::engine::CoefficientTables;
use crate::models::{GridType, ImpactResult, ModelTier, TaskLine, TaskType, UsageProfile, UsageReport};

/// 单次使用影响
pub fn compute_impact(
    tables: &CoefficientTables,
    task: TaskType,
    tier: ModelTier,
    grid: GridType,
) -> ImpactResult {
    let energy_kwh = tables.base_energy(task) * tables.efficiency_factor(tier);
    let carbon_kg = energy_kwh * tables.carbon_intensity(grid) / 1000.0;
    let water_liters = energy_kwh * tables.water_per_kwh();

    ImpactResult::new(energy_kwh, carbon_kg, water_liters)
}

/// 汇总一份用量：每个任务行 = 用量 × 单次影响
pub fn compute_usage(
    tables: &CoefficientTables,
    profile: &UsageProfile,
    tier: ModelTier,
    grid: GridType,
) -> UsageReport {
    let mut lines = Vec::new();

    for (task, quantity) in profile.iter() {
        // 负数已在 UsageProfile 拒绝
        if quantity <= 0.0 {
            continue;
        }
        let single = compute_impact(tables, task, tier, grid);
        lines.push(TaskLine {
            task,
            quantity,
            impact: single.scaled(quantity),
        });
    }

    let total = lines.iter().map(|l| l.impact).sum();

    UsageReport {
        tier,
        grid,
        lines,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_all_combinations_non_negative() {
        let tables = CoefficientTables::default();
        for task in TaskType::ALL {
            for tier in ModelTier::ALL {
                for grid in GridType::ALL {
                    let r = compute_impact(&tables, task, tier, grid);
                    assert!(r.energy_kwh >= 0.0, "{} {} {}", task, tier, grid);
                    assert!(r.carbon_kg >= 0.0, "{} {} {}", task, tier, grid);
                    assert!(r.water_liters >= 0.0, "{} {} {}", task, tier, grid);
                }
            }
        }
    }

    #[test]
    fn test_more_efficient_uses_less_energy() {
        let tables = CoefficientTables::default();
        for task in TaskType::ALL {
            for grid in GridType::ALL {
                let less = compute_impact(&tables, task, ModelTier::LessEfficient, grid);
                let more = compute_impact(&tables, task, ModelTier::MoreEfficient, grid);
                assert!(more.energy_kwh < less.energy_kwh);
            }
        }
    }

    #[test]
    fn test_carbon_increases_with_grid_intensity() {
        let tables = CoefficientTables::default();
        for task in TaskType::ALL {
            for tier in ModelTier::ALL {
                let carbons: Vec<f64> = GridType::ALL
                    .iter()
                    .map(|g| compute_impact(&tables, task, tier, *g).carbon_kg)
                    .collect();
                for pair in carbons.windows(2) {
                    assert!(pair[0] < pair[1], "{} {}: {:?}", task, tier, carbons);
                }
            }
        }
    }

    #[test]
    fn test_worked_example() {
        let tables = CoefficientTables::builder()
            .task_energy(TaskType::TextGeneration, 0.01)
            .build()
            .unwrap();

        let r = compute_impact(
            &tables,
            TaskType::TextGeneration,
            ModelTier::LessEfficient,
            GridType::Mixed,
        );
        assert!(close(r.energy_kwh, 0.01));
        assert!(close(r.carbon_kg, 0.0045));
        assert!(close(r.water_liters, 0.01 * tables.water_per_kwh()));
    }

    #[test]
    fn test_more_efficient_is_thirty_percent_of_carbon() {
        let tables = CoefficientTables::default();
        let base = compute_impact(
            &tables,
            TaskType::ImageGeneration,
            ModelTier::LessEfficient,
            GridType::Mixed,
        );
        let efficient = compute_impact(
            &tables,
            TaskType::ImageGeneration,
            ModelTier::MoreEfficient,
            GridType::Mixed,
        );
        assert!(close(efficient.carbon_kg, base.carbon_kg * 0.3));
    }

    #[test]
    fn test_usage_report_totals() {
        let tables = CoefficientTables::default();
        let profile = UsageProfile::new("student")
            .with(TaskType::TextGeneration, 20.0)
            .unwrap()
            .with(TaskType::ImageGeneration, 3.0)
            .unwrap()
            .with(TaskType::CodeGeneration, 0.0)
            .unwrap();

        let report =
            compute_usage(&tables, &profile, ModelTier::LessEfficient, GridType::Mixed);

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines[0].task, TaskType::TextGeneration);

        let expected_energy = 20.0 * 0.00027 + 3.0 * 0.0014;
        assert!(close(report.total.energy_kwh, expected_energy));
        assert!(close(report.total.carbon_kg, expected_energy * 0.45));
        assert!(close(report.total.water_liters, expected_energy * 1.9));
    }

    #[test]
    fn test_empty_usage_is_zero() {
        let tables = CoefficientTables::default();
        let report = compute_usage(
            &tables,
            &UsageProfile::new("empty"),
            ModelTier::default(),
            GridType::default(),
        );
        assert!(report.lines.is_empty());
        assert_eq!(report.total, ImpactResult::default());
    }
}
