//! # 距离单位换算
//!
//! 纯展示变换：内部距离始终以 km 存储，仅在输出边界按用户选择换算。
//!
//! ## 依赖关系
//! - 被 `commands/` 渲染时调用

use crate::engine::CoefficientTables;
use crate::models::DistanceUnit;

/// km → 显示单位
pub fn to_display_distance(tables: &CoefficientTables, km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => km,
        DistanceUnit::Miles => km * tables.km_to_miles(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_display_distance(tables: &CoefficientTables, value: f64, unit: DistanceUnit) -> f64 {
        match unit {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Miles => value / tables.km_to_miles(),
        }
    }

    #[test]
    fn test_kilometers_pass_through() {
        let tables = CoefficientTables::default();
        assert_eq!(to_display_distance(&tables, 12.5, DistanceUnit::Kilometers), 12.5);
    }

    #[test]
    fn test_miles_conversion() {
        let tables = CoefficientTables::default();
        let miles = to_display_distance(&tables, 100.0, DistanceUnit::Miles);
        assert!((miles - 62.14).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let tables = CoefficientTables::default();
        for km in [0.0, 0.018, 1.0, 6.6, 1234.5678] {
            let miles = to_display_distance(&tables, km, DistanceUnit::Miles);
            let back = from_display_distance(&tables, miles, DistanceUnit::Miles);
            let shown = to_display_distance(&tables, back, DistanceUnit::Kilometers);
            assert!((shown - km).abs() < 1e-9 * km.max(1.0));
        }
    }
}
