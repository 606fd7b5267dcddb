//! # batch 命令实现
//!
//! 批量估算目录下的用量文件，例如一个班级每人一份 CSV。
//!
//! ## 功能
//! - glob 模式收集文件，可递归
//! - rayon 并行估算，进度条反馈
//! - 汇总表格、失败列表与可选 CSV 导出
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/`, `parsers/usage.rs`, `engine/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::engine::{compute_usage, export, CoefficientTables};
use crate::error::{FootprintError, Result};
use crate::models::{ImpactResult, UsageReport};
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Tasks")]
    tasks: usize,
    #[tabled(rename = "Energy (kWh)")]
    energy: String,
    #[tabled(rename = "CO₂ (kg)")]
    carbon: String,
    #[tabled(rename = "Water (L)")]
    water: String,
}

/// 执行 batch 命令
pub fn execute(args: BatchArgs, tables: &CoefficientTables) -> Result<()> {
    output::print_header("Batch Estimate");

    if !args.input.exists() {
        return Err(FootprintError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' in '{}'",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} usage files, {} model on {}",
        files.len(),
        args.tier.name(),
        args.grid.name()
    ));

    let (tier, grid) = (args.tier, args.grid);
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |path| {
        match parsers::parse_usage_file(path) {
            Ok(profile) if profile.is_empty() => {
                ProcessResult::Skipped(format!("{}: no usage", path.display()))
            }
            Ok(profile) => {
                let report = compute_usage(tables, &profile, tier, grid);
                ProcessResult::Success((profile.name, report))
            }
            Err(e) => ProcessResult::Failed(path.display().to_string(), e.to_string()),
        }
    })?;

    let processed = result.total();
    let (skipped, failures) = (result.skipped, result.failures);
    let reports: Vec<(String, UsageReport)> =
        result.outputs.into_iter().map(|(_, output)| output).collect();

    if !reports.is_empty() {
        let rows: Vec<SummaryRow> = reports
            .iter()
            .map(|(name, report)| SummaryRow {
                profile: name.clone(),
                tasks: report.lines.len(),
                energy: format!("{:.4}", report.total.energy_kwh),
                carbon: format!("{:.4}", report.total.carbon_kg),
                water: format!("{:.2}", report.total.water_liters),
            })
            .collect();
        println!("{}", Table::new(&rows));

        let grand_total = reports.iter().map(|(_, r)| r.total).sum::<ImpactResult>();
        output::print_metric("Combined Energy", &format!("{:.4}", grand_total.energy_kwh), "kWh");
        output::print_metric("Combined Carbon", &format!("{:.4}", grand_total.carbon_kg), "kg CO₂");
        output::print_metric("Combined Water", &format!("{:.2}", grand_total.water_liters), "L");
        println!();
    }

    if let Some(ref path) = args.output_csv {
        export::summary_to_csv(&reports, path)?;
        output::print_success(&format!("Summary saved to '{}'", path.display()));
    }

    output::print_success(&format!(
        "Completed: {} estimated, {} skipped, {} failed (of {})",
        reports.len(),
        skipped,
        failures.len(),
        processed
    ));

    for (path, err) in &failures {
        output::print_error(&format!("{}: {}", path, err));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GridType, ModelTier};

    use std::fs;

    #[test]
    fn test_batch_summary_counts_and_csv() {
        let dir = std::env::temp_dir().join("aifootprint-batch-command");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("alice.csv"), "task,quantity\ntext,20\nimages,2\n").unwrap();
        fs::write(dir.join("bob.csv"), "task,quantity\ncoding,5\n").unwrap();
        fs::write(dir.join("carol.csv"), "task,quantity\ntext,0\n").unwrap();
        fs::write(dir.join("dave.csv"), "task,quantity\npodcast,3\n").unwrap();

        let summary = std::env::temp_dir().join("aifootprint-batch-summary.csv");
        let args = BatchArgs {
            input: dir,
            pattern: "*.csv".to_string(),
            recursive: false,
            tier: ModelTier::LessEfficient,
            grid: GridType::Mixed,
            jobs: 2,
            output_csv: Some(summary.clone()),
        };

        execute(args, &CoefficientTables::default()).unwrap();

        let mut rdr = csv::Reader::from_path(&summary).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        let names: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        assert_eq!(&rows[0][1], "2");
    }

    #[test]
    fn test_batch_missing_directory() {
        let args = BatchArgs {
            input: "/nonexistent/usage-dir".into(),
            pattern: "*.csv".to_string(),
            recursive: false,
            tier: ModelTier::default(),
            grid: GridType::default(),
            jobs: 1,
            output_csv: None,
        };
        assert!(matches!(
            execute(args, &CoefficientTables::default()),
            Err(FootprintError::DirectoryNotFound { .. })
        ));
    }
}
