//! # 用量数据模型
//!
//! 用户输入的各任务用量（次数、张数或分钟数）。
//!
//! ## 依赖关系
//! - 被 `parsers/usage.rs` 和 `cli/` 参数构造
//! - 被 `engine/calculator.rs` 消费

use crate::error::{FootprintError, Result};
use crate::models::TaskType;

use std::collections::BTreeMap;

/// 单个任务累计用量上限（次数、张数或分钟数）
pub const MAX_QUANTITY: f64 = 1e9;

/// 各任务用量
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageProfile {
    /// 名称（通常为来源文件名）
    pub name: String,
    quantities: BTreeMap<TaskType, f64>,
}

impl UsageProfile {
    pub fn new(name: impl Into<String>) -> Self {
        UsageProfile {
            name: name.into(),
            quantities: BTreeMap::new(),
        }
    }

    /// 累加某任务用量；负数、非有限值或累计超过 `MAX_QUANTITY` 时拒绝
    pub fn add(&mut self, task: TaskType, quantity: f64) -> Result<()> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(FootprintError::InvalidInput(format!(
                "quantity for {} must be a non-negative number, got {}",
                task, quantity
            )));
        }

        let accumulated = self.quantity(task) + quantity;
        if accumulated > MAX_QUANTITY {
            return Err(FootprintError::InvalidInput(format!(
                "total quantity for {} is {}, above the limit of {}",
                task, accumulated, MAX_QUANTITY
            )));
        }

        self.quantities.insert(task, accumulated);
        Ok(())
    }

    /// 链式构造
    pub fn with(mut self, task: TaskType, quantity: f64) -> Result<Self> {
        self.add(task, quantity)?;
        Ok(self)
    }

    pub fn quantity(&self, task: TaskType) -> f64 {
        self.quantities.get(&task).copied().unwrap_or(0.0)
    }

    /// 按任务声明顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (TaskType, f64)> + '_ {
        self.quantities.iter().map(|(t, q)| (*t, *q))
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|q| *q <= 0.0)
    }
}
