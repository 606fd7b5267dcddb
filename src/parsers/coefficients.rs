//! # 系数覆盖文件解析器
//!
//! 以默认系数表为基础，按 CSV 逐项覆盖，最后统一校验。
//!
//! ## 格式
//! ```text
//! table,key,value
//! task,text-generation,0.0003
//! grid,mixed,473
//! constant,water-per-kwh,1.8
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 在加载系数时调用
//! - 使用 `engine/tables.rs` 的 TablesBuilder

use crate::engine::CoefficientTables;
use crate::error::{FootprintError, Result};

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CoefficientRow {
    table: String,
    key: String,
    value: f64,
}

/// 加载系数：未指定文件时使用默认表
pub fn load_tables(path: Option<&Path>) -> Result<CoefficientTables> {
    match path {
        None => Ok(CoefficientTables::default()),
        Some(p) => parse_coefficients_file(p),
    }
}

/// 解析系数覆盖文件
pub fn parse_coefficients_file(path: &Path) -> Result<CoefficientTables> {
    if !path.exists() {
        return Err(FootprintError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| FootprintError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_coefficients_content(&content)
}

/// 解析系数覆盖 CSV 文本
pub fn parse_coefficients_content(content: &str) -> Result<CoefficientTables> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.trim().as_bytes());

    let mut builder = CoefficientTables::builder();
    for row in rdr.deserialize::<CoefficientRow>() {
        let row = row?;
        builder = builder.set(&row.table, &row.key, row.value)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Constant;
    use crate::models::{GridType, TaskType};

    #[test]
    fn test_override_subset() {
        let content = r#"
table,key,value
# measured on our school's provider
task,text-generation,0.0003
grid,mixed,473
constant,water-per-kwh,1.8
"#;
        let tables = parse_coefficients_content(content).unwrap();
        assert_eq!(tables.base_energy(TaskType::TextGeneration), 0.0003);
        assert_eq!(tables.carbon_intensity(GridType::Mixed), 473.0);
        assert_eq!(tables.constant(Constant::WaterPerKwh), 1.8);
        // 未覆盖的保持默认
        assert_eq!(tables.base_energy(TaskType::VideoGeneration), 12.0);
    }

    #[test]
    fn test_override_breaking_invariant() {
        let content = "table,key,value\ngrid,coal-heavy,100\n";
        let err = parse_coefficients_content(content).unwrap_err();
        assert!(matches!(err, FootprintError::Configuration { .. }));
    }

    #[test]
    fn test_unknown_constant() {
        let content = "table,key,value\nconstant,bus-ride-km,0.1\n";
        let err = parse_coefficients_content(content).unwrap_err();
        assert!(matches!(err, FootprintError::Configuration { .. }));
    }

    #[test]
    fn test_load_default() {
        assert_eq!(load_tables(None).unwrap(), CoefficientTables::default());
    }

    #[test]
    fn test_missing_file() {
        let err = load_tables(Some(Path::new("/nonexistent/coefficients.csv"))).unwrap_err();
        assert!(matches!(err, FootprintError::FileNotFound { .. }));
    }
}
