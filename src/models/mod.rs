//! # 数据模型模块
//!
//! 定义枚举类别、用量输入和计算结果值对象。
//!
//! ## 依赖关系
//! - 被 `engine/`, `parsers/` 和 `commands/` 使用
//! - 子模块: category, impact, usage

pub mod category;
pub mod impact;
pub mod usage;

pub use category::{BreakdownMode, DistanceUnit, GridType, ModelTier, ProjectionPeriod, TaskType};
pub use impact::{
    BreakdownEntry, Equivalencies, ImpactResult, Projection, Scenario, TaskLine, UsageReport,
};
pub use usage::UsageProfile;
