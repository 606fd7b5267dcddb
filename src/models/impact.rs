//! # 影响结果数据模型
//!
//! 计算引擎输出的不可变值对象：单次影响、等效换算、时间预测、
//! 用量报告与相对占比。
//!
//! ## 依赖关系
//! - 被 `engine/` 创建
//! - 被 `commands/` 渲染

use crate::models::{BreakdownMode, GridType, ModelTier, ProjectionPeriod, TaskType};

use std::iter::Sum;
use std::ops::Add;

/// 能耗、碳排放、水耗
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactResult {
    /// 能耗 (kWh)
    pub energy_kwh: f64,
    /// 碳排放 (kg CO₂)
    pub carbon_kg: f64,
    /// 水耗 (L)
    pub water_liters: f64,
}

impl ImpactResult {
    pub fn new(energy_kwh: f64, carbon_kg: f64, water_liters: f64) -> Self {
        ImpactResult {
            energy_kwh,
            carbon_kg,
            water_liters,
        }
    }

    /// 三项同时乘以比例因子，返回新值
    pub fn scaled(&self, factor: f64) -> Self {
        ImpactResult {
            energy_kwh: self.energy_kwh * factor,
            carbon_kg: self.carbon_kg * factor,
            water_liters: self.water_liters * factor,
        }
    }

    /// 按统计口径取值
    pub fn value_for(&self, mode: BreakdownMode) -> f64 {
        match mode {
            BreakdownMode::Energy => self.energy_kwh,
            BreakdownMode::Carbon => self.carbon_kg,
        }
    }
}

impl Add for ImpactResult {
    type Output = ImpactResult;

    fn add(self, rhs: ImpactResult) -> ImpactResult {
        ImpactResult {
            energy_kwh: self.energy_kwh + rhs.energy_kwh,
            carbon_kg: self.carbon_kg + rhs.carbon_kg,
            water_liters: self.water_liters + rhs.water_liters,
        }
    }
}

impl Sum for ImpactResult {
    fn sum<I: Iterator<Item = ImpactResult>>(iter: I) -> Self {
        iter.fold(ImpactResult::default(), |acc, r| acc + r)
    }
}

/// 生活化等效量
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Equivalencies {
    /// 树木吸收所需月数
    pub tree_months: f64,
    /// 手机充电次数
    pub phone_charges: f64,
    /// 淋浴次数
    pub showers: f64,
    /// 灯泡点亮小时数
    pub lightbulb_hours: f64,
    /// 汽车行驶距离，始终以 km 存储
    pub distance_km: f64,
}

/// 某一时长的预测
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub period: ProjectionPeriod,
    pub daily_frequency: u32,
    pub scaled_result: ImpactResult,
    pub scaled_equivalencies: Equivalencies,
}

impl Projection {
    /// 总倍数 = 每日次数 × 天数
    pub fn scale_factor(&self) -> f64 {
        self.daily_frequency as f64 * self.period.days() as f64
    }
}

/// 用量报告中的单个任务行
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskLine {
    pub task: TaskType,
    pub quantity: f64,
    pub impact: ImpactResult,
}

/// 一份用量的估算报告
#[derive(Debug, Clone, PartialEq)]
pub struct UsageReport {
    pub tier: ModelTier,
    pub grid: GridType,
    /// 仅包含用量大于 0 的任务，按任务声明顺序
    pub lines: Vec<TaskLine>,
    pub total: ImpactResult,
}

/// 相对占比条目
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownEntry {
    pub task: TaskType,
    pub value: f64,
    /// 占全部条目之和的比例 (0-1)
    pub share: f64,
}

/// 档位 × 电网组合的对比结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub tier: ModelTier,
    pub grid: GridType,
    pub total: ImpactResult,
    /// 相对默认组合 (LessEfficient, Mixed) 的碳排放比例
    pub carbon_ratio: f64,
}
