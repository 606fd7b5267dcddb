//! # 影响估算引擎
//!
//! 确定性的计算流水线：系数表 → 单次影响 → {单位换算, 等效换算,
//! 时间预测, 相对占比}。所有函数都是同步纯函数，输入显式传入。
//!
//! ## 子模块
//! - `tables`: 系数表
//! - `calculator`: 单次影响与用量汇总
//! - `units`: 距离单位换算
//! - `equivalency`: 等效换算
//! - `projection`: 时间预测
//! - `breakdown`: 相对占比
//! - `compare`: 档位 × 电网情景对比
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`

pub mod breakdown;
pub mod calculator;
pub mod compare;
pub mod equivalency;
pub mod export;
pub mod plot;
pub mod projection;
pub mod tables;
pub mod units;

pub use breakdown::{compute_breakdown, profile_breakdown};
pub use calculator::compute_usage;
pub use compare::compare_scenarios;
pub use equivalency::compute_equivalencies;
pub use projection::compute_projections;
pub use tables::{CoefficientTables, Constant};
pub use units::to_display_distance;
