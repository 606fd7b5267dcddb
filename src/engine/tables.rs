//! # 系数表
//!
//! 只读参考数据：任务基础能耗、模型效率倍率、电网碳强度、
//! 单位能耗耗水量以及全部等效换算常量。
//!
//! ## 设计
//! - 每张表以结构体字段存储，查表为穷尽 `match`，
//!   新增枚举成员时所有表必须同步补齐才能编译
//! - 构造后不可修改；修改只能经由 `TablesBuilder` 并重新校验
//! - 校验失败返回 `FootprintError::Configuration`
//!
//! ## 数据来源
//! - 任务能耗：各类公开测量（文本 0.00027 kWh/query，视频 12 kWh/min 等）
//! - 电网碳强度：Clean 15, Renewable Heavy 150, Mixed 450, Coal-Heavy 650 gCO₂/kWh
//! - WUE：1.9 L/kWh
//!
//! ## 依赖关系
//! - 被 `engine/` 其余子模块使用
//! - 被 `parsers/coefficients.rs` 通过 `TablesBuilder` 覆盖

use crate::error::{FootprintError, Result};
use crate::models::{GridType, ModelTier, TaskType};

use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────
// 单张表
// ─────────────────────────────────────────────────────────────

/// 任务基础能耗表 (kWh / 次)
#[derive(Debug, Clone, Copy, PartialEq)]
struct TaskEnergyTable {
    text_generation: f64,
    image_generation: f64,
    code_generation: f64,
    video_generation: f64,
    audio_generation: f64,
    data_analysis: f64,
    deep_research: f64,
}

impl TaskEnergyTable {
    fn get(&self, task: TaskType) -> f64 {
        match task {
            TaskType::TextGeneration => self.text_generation,
            TaskType::ImageGeneration => self.image_generation,
            TaskType::CodeGeneration => self.code_generation,
            TaskType::VideoGeneration => self.video_generation,
            TaskType::AudioGeneration => self.audio_generation,
            TaskType::DataAnalysis => self.data_analysis,
            TaskType::DeepResearch => self.deep_research,
        }
    }

    fn slot(&mut self, task: TaskType) -> &mut f64 {
        match task {
            TaskType::TextGeneration => &mut self.text_generation,
            TaskType::ImageGeneration => &mut self.image_generation,
            TaskType::CodeGeneration => &mut self.code_generation,
            TaskType::VideoGeneration => &mut self.video_generation,
            TaskType::AudioGeneration => &mut self.audio_generation,
            TaskType::DataAnalysis => &mut self.data_analysis,
            TaskType::DeepResearch => &mut self.deep_research,
        }
    }
}

/// 模型效率倍率表
#[derive(Debug, Clone, Copy, PartialEq)]
struct EfficiencyTable {
    locally_hosted: f64,
    less_efficient: f64,
    more_efficient: f64,
}

impl EfficiencyTable {
    fn get(&self, tier: ModelTier) -> f64 {
        match tier {
            ModelTier::LocallyHosted => self.locally_hosted,
            ModelTier::LessEfficient => self.less_efficient,
            ModelTier::MoreEfficient => self.more_efficient,
        }
    }

    fn slot(&mut self, tier: ModelTier) -> &mut f64 {
        match tier {
            ModelTier::LocallyHosted => &mut self.locally_hosted,
            ModelTier::LessEfficient => &mut self.less_efficient,
            ModelTier::MoreEfficient => &mut self.more_efficient,
        }
    }
}

/// 电网碳强度表 (gCO₂ / kWh)
#[derive(Debug, Clone, Copy, PartialEq)]
struct IntensityTable {
    clean: f64,
    renewable_heavy: f64,
    mixed: f64,
    coal_heavy: f64,
}

impl IntensityTable {
    fn get(&self, grid: GridType) -> f64 {
        match grid {
            GridType::Clean => self.clean,
            GridType::RenewableHeavy => self.renewable_heavy,
            GridType::Mixed => self.mixed,
            GridType::CoalHeavy => self.coal_heavy,
        }
    }

    fn slot(&mut self, grid: GridType) -> &mut f64 {
        match grid {
            GridType::Clean => &mut self.clean,
            GridType::RenewableHeavy => &mut self.renewable_heavy,
            GridType::Mixed => &mut self.mixed,
            GridType::CoalHeavy => &mut self.coal_heavy,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 标量常量
// ─────────────────────────────────────────────────────────────

/// 命名常量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// 数据中心耗水 (L / kWh)
    WaterPerKwh,
    /// 每棵树每月吸收 CO₂ (kg)
    TreeAbsorptionPerMonth,
    /// 一次手机充电能耗 (kWh)
    PhoneChargeKwh,
    /// 一次淋浴用水 (L)
    ShowerWaterLiters,
    /// 灯泡每小时能耗 (Wh)
    LightbulbWattHours,
    /// 汽车每公里排放 (kg CO₂)
    Co2PerKmDriven,
    /// 公里换英里
    KmToMiles,
}

impl Constant {
    pub const ALL: [Constant; 7] = [
        Constant::WaterPerKwh,
        Constant::TreeAbsorptionPerMonth,
        Constant::PhoneChargeKwh,
        Constant::ShowerWaterLiters,
        Constant::LightbulbWattHours,
        Constant::Co2PerKmDriven,
        Constant::KmToMiles,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Constant::WaterPerKwh => "water-per-kwh",
            Constant::TreeAbsorptionPerMonth => "tree-absorption-per-month",
            Constant::PhoneChargeKwh => "phone-charge-kwh",
            Constant::ShowerWaterLiters => "shower-water-liters",
            Constant::LightbulbWattHours => "lightbulb-watt-hours",
            Constant::Co2PerKmDriven => "co2-per-km-driven",
            Constant::KmToMiles => "km-to-miles",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Constant::WaterPerKwh => "L/kWh",
            Constant::TreeAbsorptionPerMonth => "kg CO₂/month",
            Constant::PhoneChargeKwh => "kWh/charge",
            Constant::ShowerWaterLiters => "L/shower",
            Constant::LightbulbWattHours => "Wh/hour",
            Constant::Co2PerKmDriven => "kg CO₂/km",
            Constant::KmToMiles => "miles/km",
        }
    }

    /// 作为除数使用的常量必须严格为正
    fn is_divisor(&self) -> bool {
        !matches!(self, Constant::WaterPerKwh)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Constant {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Constant::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| FootprintError::configuration("constant", format!("unknown key '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ConstantTable {
    water_per_kwh: f64,
    tree_absorption_per_month: f64,
    phone_charge_kwh: f64,
    shower_water_liters: f64,
    lightbulb_watt_hours: f64,
    co2_per_km_driven: f64,
    km_to_miles: f64,
}

impl ConstantTable {
    fn get(&self, constant: Constant) -> f64 {
        match constant {
            Constant::WaterPerKwh => self.water_per_kwh,
            Constant::TreeAbsorptionPerMonth => self.tree_absorption_per_month,
            Constant::PhoneChargeKwh => self.phone_charge_kwh,
            Constant::ShowerWaterLiters => self.shower_water_liters,
            Constant::LightbulbWattHours => self.lightbulb_watt_hours,
            Constant::Co2PerKmDriven => self.co2_per_km_driven,
            Constant::KmToMiles => self.km_to_miles,
        }
    }

    fn slot(&mut self, constant: Constant) -> &mut f64 {
        match constant {
            Constant::WaterPerKwh => &mut self.water_per_kwh,
            Constant::TreeAbsorptionPerMonth => &mut self.tree_absorption_per_month,
            Constant::PhoneChargeKwh => &mut self.phone_charge_kwh,
            Constant::ShowerWaterLiters => &mut self.shower_water_liters,
            Constant::LightbulbWattHours => &mut self.lightbulb_watt_hours,
            Constant::Co2PerKmDriven => &mut self.co2_per_km_driven,
            Constant::KmToMiles => &mut self.km_to_miles,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 系数表
// ─────────────────────────────────────────────────────────────

/// 全部系数（构造后只读）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientTables {
    tasks: TaskEnergyTable,
    tiers: EfficiencyTable,
    grids: IntensityTable,
    constants: ConstantTable,
}

impl Default for CoefficientTables {
    fn default() -> Self {
        CoefficientTables {
            tasks: TaskEnergyTable {
                text_generation: 0.00027,
                image_generation: 0.0014,
                code_generation: 0.0003,
                video_generation: 12.0,
                audio_generation: 0.06,
                data_analysis: 0.0005,
                deep_research: 0.0054,
            },
            tiers: EfficiencyTable {
                locally_hosted: 1.0,
                less_efficient: 1.0,
                more_efficient: 0.3,
            },
            grids: IntensityTable {
                clean: 15.0,
                renewable_heavy: 150.0,
                mixed: 450.0,
                coal_heavy: 650.0,
            },
            constants: ConstantTable {
                water_per_kwh: 1.9,
                tree_absorption_per_month: 1.75,
                phone_charge_kwh: 0.015,
                shower_water_liters: 65.0,
                lightbulb_watt_hours: 60.0,
                co2_per_km_driven: 0.25,
                km_to_miles: 0.6214,
            },
        }
    }
}

impl CoefficientTables {
    /// 从默认值开始构造自定义系数表
    pub fn builder() -> TablesBuilder {
        TablesBuilder {
            tables: CoefficientTables::default(),
        }
    }

    /// 任务单次基础能耗 (kWh)
    pub fn base_energy(&self, task: TaskType) -> f64 {
        self.tasks.get(task)
    }

    /// 模型效率倍率
    pub fn efficiency_factor(&self, tier: ModelTier) -> f64 {
        self.tiers.get(tier)
    }

    /// 电网碳强度 (gCO₂/kWh)
    pub fn carbon_intensity(&self, grid: GridType) -> f64 {
        self.grids.get(grid)
    }

    pub fn constant(&self, constant: Constant) -> f64 {
        self.constants.get(constant)
    }

    pub fn water_per_kwh(&self) -> f64 {
        self.constants.water_per_kwh
    }

    pub fn tree_absorption_per_month(&self) -> f64 {
        self.constants.tree_absorption_per_month
    }

    pub fn phone_charge_kwh(&self) -> f64 {
        self.constants.phone_charge_kwh
    }

    pub fn shower_water_liters(&self) -> f64 {
        self.constants.shower_water_liters
    }

    pub fn lightbulb_watt_hours(&self) -> f64 {
        self.constants.lightbulb_watt_hours
    }

    pub fn co2_per_km_driven(&self) -> f64 {
        self.constants.co2_per_km_driven
    }

    pub fn km_to_miles(&self) -> f64 {
        self.constants.km_to_miles
    }

    /// 校验全部表项
    pub fn validate(&self) -> Result<()> {
        for task in TaskType::ALL {
            check_coefficient("task", task.key(), self.base_energy(task))?;
        }
        for tier in ModelTier::ALL {
            check_coefficient("tier", tier.key(), self.efficiency_factor(tier))?;
        }
        for grid in GridType::ALL {
            check_coefficient("grid", grid.key(), self.carbon_intensity(grid))?;
        }
        for constant in Constant::ALL {
            let value = self.constant(constant);
            check_coefficient("constant", constant.key(), value)?;
            if constant.is_divisor() && value <= 0.0 {
                return Err(FootprintError::configuration(
                    "constant",
                    format!("'{}' must be greater than zero, got {}", constant, value),
                ));
            }
        }

        let less = self.efficiency_factor(ModelTier::LessEfficient);
        let more = self.efficiency_factor(ModelTier::MoreEfficient);
        if more >= less {
            return Err(FootprintError::configuration(
                "tier",
                format!(
                    "more-efficient factor ({}) must be lower than less-efficient factor ({})",
                    more, less
                ),
            ));
        }

        for pair in GridType::ALL.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if self.carbon_intensity(lo) >= self.carbon_intensity(hi) {
                return Err(FootprintError::configuration(
                    "grid",
                    format!(
                        "carbon intensity must increase from {} ({}) to {} ({})",
                        lo,
                        self.carbon_intensity(lo),
                        hi,
                        self.carbon_intensity(hi)
                    ),
                ));
            }
        }

        Ok(())
    }
}

fn check_coefficient(table: &str, key: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FootprintError::configuration(
            table,
            format!("'{}' must be a finite non-negative number, got {}", key, value),
        ));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 构造器
// ─────────────────────────────────────────────────────────────

/// 系数表构造器，`build()` 时统一校验
#[derive(Debug, Clone)]
pub struct TablesBuilder {
    tables: CoefficientTables,
}

impl TablesBuilder {
    pub fn task_energy(mut self, task: TaskType, kwh: f64) -> Self {
        *self.tables.tasks.slot(task) = kwh;
        self
    }

    pub fn efficiency(mut self, tier: ModelTier, factor: f64) -> Self {
        *self.tables.tiers.slot(tier) = factor;
        self
    }

    pub fn intensity(mut self, grid: GridType, g_per_kwh: f64) -> Self {
        *self.tables.grids.slot(grid) = g_per_kwh;
        self
    }

    pub fn constant(mut self, constant: Constant, value: f64) -> Self {
        *self.tables.constants.slot(constant) = value;
        self
    }

    /// 按 (表名, 键名) 覆盖，用于外部系数文件
    pub fn set(self, table: &str, key: &str, value: f64) -> Result<Self> {
        let unknown =
            |_: FootprintError| FootprintError::configuration(table, format!("unknown key '{}'", key));

        match table.trim().to_lowercase().as_str() {
            "task" => Ok(self.task_energy(key.parse().map_err(unknown)?, value)),
            "tier" => Ok(self.efficiency(key.parse().map_err(unknown)?, value)),
            "grid" => Ok(self.intensity(key.parse().map_err(unknown)?, value)),
            "constant" => Ok(self.constant(key.parse()?, value)),
            other => Err(FootprintError::configuration(
                other,
                "unknown table (expected task, tier, grid or constant)",
            )),
        }
    }

    pub fn build(self) -> Result<CoefficientTables> {
        self.tables.validate()?;
        Ok(self.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_valid() {
        assert!(CoefficientTables::default().validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        let t = CoefficientTables::default();
        assert_eq!(t.base_energy(TaskType::TextGeneration), 0.00027);
        assert_eq!(t.base_energy(TaskType::VideoGeneration), 12.0);
        assert_eq!(t.efficiency_factor(ModelTier::MoreEfficient), 0.3);
        assert_eq!(t.carbon_intensity(GridType::Mixed), 450.0);
        assert_eq!(t.water_per_kwh(), 1.9);
        assert_eq!(t.km_to_miles(), 0.6214);
    }

    #[test]
    fn test_tier_ordering_invariant() {
        let tiers = CoefficientTables::default();
        assert!(
            tiers.efficiency_factor(ModelTier::MoreEfficient)
                < tiers.efficiency_factor(ModelTier::LessEfficient)
        );

        let err = CoefficientTables::builder()
            .efficiency(ModelTier::MoreEfficient, 1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, FootprintError::Configuration { .. }));
    }

    #[test]
    fn test_grid_ordering_invariant() {
        let err = CoefficientTables::builder()
            .intensity(GridType::Clean, 500.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, FootprintError::Configuration { .. }));
    }

    #[test]
    fn test_zero_divisor_rejected() {
        for constant in Constant::ALL.into_iter().filter(|c| c.is_divisor()) {
            let result = CoefficientTables::builder().constant(constant, 0.0).build();
            assert!(result.is_err(), "{} = 0 should be rejected", constant);
        }
        // 耗水量为 0 是合法的（例如完全空冷）
        assert!(CoefficientTables::builder()
            .constant(Constant::WaterPerKwh, 0.0)
            .build()
            .is_ok());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(CoefficientTables::builder()
            .task_energy(TaskType::AudioGeneration, -0.1)
            .build()
            .is_err());
        assert!(CoefficientTables::builder()
            .task_energy(TaskType::AudioGeneration, f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn test_set_by_key() {
        let tables = CoefficientTables::builder()
            .set("task", "text", 0.01)
            .unwrap()
            .set("grid", "coal-heavy", 800.0)
            .unwrap()
            .set("constant", "shower_water_liters", 50.0)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tables.base_energy(TaskType::TextGeneration), 0.01);
        assert_eq!(tables.carbon_intensity(GridType::CoalHeavy), 800.0);
        assert_eq!(tables.shower_water_liters(), 50.0);
    }

    #[test]
    fn test_set_unknown_key_is_configuration_error() {
        let err = CoefficientTables::builder()
            .set("task", "podcast", 1.0)
            .unwrap_err();
        assert!(matches!(err, FootprintError::Configuration { .. }));

        let err = CoefficientTables::builder()
            .set("region", "mixed", 1.0)
            .unwrap_err();
        assert!(matches!(err, FootprintError::Configuration { .. }));
    }
}
