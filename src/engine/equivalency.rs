//! # 等效换算
//!
//! 把能耗/碳排放/水耗映射为生活化的量。所有换算都是对固定常量的比值，
//! 常量在系数表构造时已保证非零。
//!
//! ## 依赖关系
//! - 被 `engine/projection.rs` 和 `commands/` 使用

use crate::engine::CoefficientTables;
use crate::models::{Equivalencies, ImpactResult};

/// 由影响值推导等效量
pub fn compute_equivalencies(tables: &CoefficientTables, result: &ImpactResult) -> Equivalencies {
    Equivalencies {
        distance_km: result.carbon_kg / tables.co2_per_km_driven(),
        tree_months: result.carbon_kg / tables.tree_absorption_per_month(),
        phone_charges: result.energy_kwh / tables.phone_charge_kwh(),
        showers: result.water_liters / tables.shower_water_liters(),
        lightbulb_hours: result.energy_kwh * 1000.0 / tables.lightbulb_watt_hours(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalencies_default_constants() {
        let tables = CoefficientTables::default();
        let result = ImpactResult::new(0.3, 1.75, 65.0);
        let eq = compute_equivalencies(&tables, &result);

        assert!((eq.distance_km - 7.0).abs() < 1e-12);
        assert!((eq.tree_months - 1.0).abs() < 1e-12);
        assert!((eq.phone_charges - 20.0).abs() < 1e-9);
        assert!((eq.showers - 1.0).abs() < 1e-12);
        assert!((eq.lightbulb_hours - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_impact_gives_zero_equivalencies() {
        let tables = CoefficientTables::default();
        let eq = compute_equivalencies(&tables, &ImpactResult::default());
        assert_eq!(eq, Equivalencies::default());
    }
}
