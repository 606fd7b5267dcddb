//! # 统一错误处理模块
//!
//! 定义 aifootprint 的所有错误类型，使用 `thiserror` 派生。
//!
//! 计算引擎本身只会产生两类错误：
//! - `Configuration`: 系数表缺项或常量非法（程序缺陷，不可恢复）
//! - `InvalidInput`: 调用方传入非法频率、时长或用量（校验失败）
//!
//! 其余变体属于命令行外层（文件读写、CSV、图表）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// aifootprint 统一错误类型
#[derive(Error, Debug)]
pub enum FootprintError {
    // ─────────────────────────────────────────────────────────────
    // 引擎错误
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error in {table} table: {reason}")]
    Configuration { table: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("Chart rendering failed: {0}")]
    PlotError(String),

    #[error("{0}")]
    Other(String),
}

impl FootprintError {
    /// 构造配置错误
    pub fn configuration(table: &str, reason: impl Into<String>) -> Self {
        FootprintError::Configuration {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, FootprintError>;
