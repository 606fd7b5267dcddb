//! # 枚举类别
//!
//! 任务类型、模型效率档位、电网类型以及纯展示用的切换选项。
//! 全部为封闭枚举，系数表对它们做穷尽匹配。
//!
//! ## 依赖关系
//! - 被 `engine/`, `parsers/`, `cli/` 使用
//! - 使用 `clap::ValueEnum` 直接作为命令行取值

use crate::error::{FootprintError, Result};

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────
// 任务类型
// ─────────────────────────────────────────────────────────────

/// AI 任务类型（声明顺序即展示与统计顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum TaskType {
    /// Text generation (chat queries)
    TextGeneration,
    /// Image generation
    ImageGeneration,
    /// Coding assistance tasks
    CodeGeneration,
    /// Video generation, per minute of output
    VideoGeneration,
    /// Audio generation, per minute of output
    AudioGeneration,
    /// Data analysis tasks
    DataAnalysis,
    /// Multi-step deep research queries
    DeepResearch,
}

impl TaskType {
    /// 全部任务类型，按声明顺序
    pub const ALL: [TaskType; 7] = [
        TaskType::TextGeneration,
        TaskType::ImageGeneration,
        TaskType::CodeGeneration,
        TaskType::VideoGeneration,
        TaskType::AudioGeneration,
        TaskType::DataAnalysis,
        TaskType::DeepResearch,
    ];

    /// 文件与命令行中使用的键名
    pub fn key(&self) -> &'static str {
        match self {
            TaskType::TextGeneration => "text-generation",
            TaskType::ImageGeneration => "image-generation",
            TaskType::CodeGeneration => "code-generation",
            TaskType::VideoGeneration => "video-generation",
            TaskType::AudioGeneration => "audio-generation",
            TaskType::DataAnalysis => "data-analysis",
            TaskType::DeepResearch => "deep-research",
        }
    }

    /// 展示名称
    pub fn name(&self) -> &'static str {
        match self {
            TaskType::TextGeneration => "Text Generation",
            TaskType::ImageGeneration => "Image Generation",
            TaskType::CodeGeneration => "Coding Tasks",
            TaskType::VideoGeneration => "Video Generation",
            TaskType::AudioGeneration => "Audio Generation",
            TaskType::DataAnalysis => "Data Analysis",
            TaskType::DeepResearch => "Deep Research",
        }
    }

    /// 计量单位（单次调用对应的量）
    pub fn unit(&self) -> &'static str {
        match self {
            TaskType::TextGeneration | TaskType::DeepResearch => "queries",
            TaskType::ImageGeneration => "images",
            TaskType::CodeGeneration | TaskType::DataAnalysis => "tasks",
            TaskType::VideoGeneration | TaskType::AudioGeneration => "minutes",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for TaskType {
    type Err = FootprintError;

    /// 解析任务键名，接受常见别名
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace('_', "-");
        let task = match key.as_str() {
            "text-generation" | "text" | "textgen" => TaskType::TextGeneration,
            "image-generation" | "image" | "images" => TaskType::ImageGeneration,
            "code-generation" | "code" | "coding" => TaskType::CodeGeneration,
            "video-generation" | "video" => TaskType::VideoGeneration,
            "audio-generation" | "audio" => TaskType::AudioGeneration,
            "data-analysis" | "analysis" => TaskType::DataAnalysis,
            "deep-research" | "research" | "deepresearch" => TaskType::DeepResearch,
            _ => {
                return Err(FootprintError::InvalidArgument(format!(
                    "Unknown task type '{}'. Expected one of: {}",
                    s,
                    TaskType::ALL
                        .iter()
                        .map(|t| t.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        };
        Ok(task)
    }
}

// ─────────────────────────────────────────────────────────────
// 模型效率档位
// ─────────────────────────────────────────────────────────────

/// AI 模型效率档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ModelTier {
    /// Model running locally on your own hardware (Ollama, LM Studio, ...)
    LocallyHosted,
    /// Older or larger hosted models
    #[default]
    LessEfficient,
    /// Latest efficient hosted models
    MoreEfficient,
}

impl ModelTier {
    pub const ALL: [ModelTier; 3] = [
        ModelTier::LocallyHosted,
        ModelTier::LessEfficient,
        ModelTier::MoreEfficient,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ModelTier::LocallyHosted => "locally-hosted",
            ModelTier::LessEfficient => "less-efficient",
            ModelTier::MoreEfficient => "more-efficient",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelTier::LocallyHosted => "Locally Hosted",
            ModelTier::LessEfficient => "Less Efficient",
            ModelTier::MoreEfficient => "More Efficient",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ModelTier {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "locally-hosted" | "local" => Ok(ModelTier::LocallyHosted),
            "less-efficient" => Ok(ModelTier::LessEfficient),
            "more-efficient" => Ok(ModelTier::MoreEfficient),
            _ => Err(FootprintError::InvalidArgument(format!(
                "Unknown model tier '{}'",
                s
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 电网类型
// ─────────────────────────────────────────────────────────────

/// 电网碳强度分类（按碳强度递增声明）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum GridType {
    /// Predominantly hydro, nuclear and geothermal
    Clean,
    /// Wind and solar dominant with fossil backup
    RenewableHeavy,
    /// Mix of fossil fuels, nuclear and renewables
    #[default]
    Mixed,
    /// Coal-dominant generation
    CoalHeavy,
}

impl GridType {
    pub const ALL: [GridType; 4] = [
        GridType::Clean,
        GridType::RenewableHeavy,
        GridType::Mixed,
        GridType::CoalHeavy,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            GridType::Clean => "clean",
            GridType::RenewableHeavy => "renewable-heavy",
            GridType::Mixed => "mixed",
            GridType::CoalHeavy => "coal-heavy",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GridType::Clean => "Clean Grid",
            GridType::RenewableHeavy => "Renewable Heavy",
            GridType::Mixed => "Mixed Grid",
            GridType::CoalHeavy => "Coal-Heavy",
        }
    }

    /// 代表性地区
    pub fn examples(&self) -> &'static str {
        match self {
            GridType::Clean => "Norway, Iceland, France",
            GridType::RenewableHeavy => "Denmark, EU average",
            GridType::Mixed => "Global average, US",
            GridType::CoalHeavy => "Poland, China",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GridType::Clean => "Predominantly hydro, nuclear, and geothermal",
            GridType::RenewableHeavy => "Wind and solar dominant with fossil backup",
            GridType::Mixed => "Mix of fossil fuels, nuclear, and renewables",
            GridType::CoalHeavy => "Coal-dominant generation",
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for GridType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "clean" => Ok(GridType::Clean),
            "renewable-heavy" | "renewable" => Ok(GridType::RenewableHeavy),
            "mixed" => Ok(GridType::Mixed),
            "coal-heavy" | "coal" => Ok(GridType::CoalHeavy),
            _ => Err(FootprintError::InvalidArgument(format!(
                "Unknown grid type '{}'",
                s
            ))),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 展示切换
// ─────────────────────────────────────────────────────────────

/// 距离显示单位（只影响展示，不影响存储值）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DistanceUnit {
    /// Kilometers
    #[default]
    #[value(name = "km")]
    Kilometers,
    /// Miles
    Miles,
}

impl DistanceUnit {
    pub fn label(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "miles",
        }
    }
}

/// 相对影响统计口径
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BreakdownMode {
    /// Energy (kWh)
    Energy,
    /// Carbon emissions (kg CO2)
    #[default]
    Carbon,
}

impl fmt::Display for BreakdownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownMode::Energy => write!(f, "energy"),
            BreakdownMode::Carbon => write!(f, "carbon"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 预测时长
// ─────────────────────────────────────────────────────────────

/// 支持的预测时长
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionPeriod {
    Week,
    Month,
    Semester,
}

impl ProjectionPeriod {
    pub const ALL: [ProjectionPeriod; 3] = [
        ProjectionPeriod::Week,
        ProjectionPeriod::Month,
        ProjectionPeriod::Semester,
    ];

    /// 对应天数
    pub fn days(&self) -> u32 {
        match self {
            ProjectionPeriod::Week => 7,
            ProjectionPeriod::Month => 30,
            ProjectionPeriod::Semester => 140,
        }
    }

    /// 由天数反查时长，仅接受 7 / 30 / 140
    pub fn from_days(days: u32) -> Result<Self> {
        ProjectionPeriod::ALL
            .into_iter()
            .find(|p| p.days() == days)
            .ok_or_else(|| {
                FootprintError::InvalidInput(format!(
                    "unsupported projection duration {} days (expected 7, 30 or 140)",
                    days
                ))
            })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProjectionPeriod::Week => "Week",
            ProjectionPeriod::Month => "Month",
            ProjectionPeriod::Semester => "Semester",
        }
    }
}

impl fmt::Display for ProjectionPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} days)", self.name(), self.days())
    }
}
