//! # 情景对比
//!
//! 对同一份用量枚举全部 模型档位 × 电网 组合，展示选择高效模型
//! 或清洁电网能减少多少排放。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 调用
//! - 使用 `engine/calculator.rs`

use crate::engine::{compute_usage, CoefficientTables};
use crate::models::{GridType, ModelTier, Scenario, UsageProfile};

/// 默认参照组合
pub const BASELINE: (ModelTier, GridType) = (ModelTier::LessEfficient, GridType::Mixed);

/// 按档位优先、声明顺序枚举全部组合
pub fn compare_scenarios(tables: &CoefficientTables, profile: &UsageProfile) -> Vec<Scenario> {
    let baseline = compute_usage(tables, profile, BASELINE.0, BASELINE.1).total;

    let mut scenarios = Vec::with_capacity(ModelTier::ALL.len() * GridType::ALL.len());
    for tier in ModelTier::ALL {
        for grid in GridType::ALL {
            let total = compute_usage(tables, profile, tier, grid).total;
            let carbon_ratio = if baseline.carbon_kg > 0.0 {
                total.carbon_kg / baseline.carbon_kg
            } else {
                0.0
            };
            scenarios.push(Scenario {
                tier,
                grid,
                total,
                carbon_ratio,
            });
        }
    }

    scenarios
}
