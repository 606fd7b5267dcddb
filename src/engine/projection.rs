//! # 时间预测
//!
//! 假设每天重复使用，将单次影响按 `每日次数 × 天数` 放大。
//! 等效量不直接线性放大，而是由放大后的影响值重新推导，
//! 与 `engine/equivalency.rs` 的比值关系保持一致。
//!
//! 支持的时长只有一周 (7)、一月 (30)、一学期 (140) 天。
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs` 调用
//! - 使用 `engine/equivalency.rs`

use crate::engine::{compute_equivalencies, CoefficientTables};
use crate::error::{FootprintError, Result};
use crate::models::{ImpactResult, Projection, ProjectionPeriod};

/// 校验每日次数
pub fn validate_frequency(daily_frequency: u32) -> Result<()> {
    if daily_frequency == 0 {
        return Err(FootprintError::InvalidInput(
            "daily frequency must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// 按天数计算单个时长的预测
pub fn compute_projection(
    tables: &CoefficientTables,
    result: &ImpactResult,
    daily_frequency: u32,
    duration_days: u32,
) -> Result<Projection> {
    validate_frequency(daily_frequency)?;
    let period = ProjectionPeriod::from_days(duration_days)?;
    Ok(project(tables, result, daily_frequency, period))
}

/// 计算一周、一月、一学期三个预测
pub fn compute_projections(
    tables: &CoefficientTables,
    result: &ImpactResult,
    daily_frequency: u32,
) -> Result<Vec<Projection>> {
    ProjectionPeriod::ALL
        .iter()
        .map(|period| compute_projection(tables, result, daily_frequency, period.days()))
        .collect()
}

fn project(
    tables: &CoefficientTables,
    result: &ImpactResult,
    daily_frequency: u32,
    period: ProjectionPeriod,
) -> Projection {
    let scale = daily_frequency as f64 * period.days() as f64;
    let scaled_result = result.scaled(scale);

    Projection {
        period,
        daily_frequency,
        scaled_result,
        scaled_equivalencies: compute_equivalencies(tables, &scaled_result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_projection_example() {
        let tables = CoefficientTables::default();
        let single = ImpactResult::new(0.01, 0.0045, 0.019);
        let p = compute_projection(&tables, &single, 5, 30).unwrap();

        assert_eq!(p.period, ProjectionPeriod::Month);
        assert!((p.scaled_result.energy_kwh - 1.5).abs() < 1e-12);
        assert!((p.scale_factor() - 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_linearity() {
        let tables = CoefficientTables::default();
        let single = ImpactResult::new(0.0014, 0.00063, 0.00266);
        for f in [1u32, 3, 12] {
            for d in [7u32, 30, 140] {
                let p = compute_projection(&tables, &single, f, d).unwrap();
                let expected = single.energy_kwh * f as f64 * d as f64;
                assert!((p.scaled_result.energy_kwh - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_equivalencies_rederived_from_scaled_result() {
        let tables = CoefficientTables::default();
        let single = ImpactResult::new(0.02, 0.009, 0.038);
        let p = compute_projection(&tables, &single, 2, 140).unwrap();
        let direct = compute_equivalencies(&tables, &p.scaled_result);
        assert_eq!(p.scaled_equivalencies, direct);

        let single_eq = compute_equivalencies(&tables, &single);
        let linear = single_eq.tree_months * 280.0;
        assert!((p.scaled_equivalencies.tree_months - linear).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let tables = CoefficientTables::default();
        let err = compute_projection(&tables, &ImpactResult::default(), 0, 7).unwrap_err();
        assert!(matches!(err, FootprintError::InvalidInput(_)));
        assert!(compute_projections(&tables, &ImpactResult::default(), 0).is_err());
    }

    #[test]
    fn test_unsupported_duration_rejected() {
        let tables = CoefficientTables::default();
        let err = compute_projection(&tables, &ImpactResult::default(), 1, 365).unwrap_err();
        assert!(matches!(err, FootprintError::InvalidInput(_)));
    }

    #[test]
    fn test_projections_in_period_order() {
        let tables = CoefficientTables::default();
        let all = compute_projections(&tables, &ImpactResult::new(1.0, 0.45, 1.9), 1).unwrap();
        let days: Vec<u32> = all.iter().map(|p| p.period.days()).collect();
        assert_eq!(days, vec![7, 30, 140]);
    }
}
