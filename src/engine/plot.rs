//! # 占比柱状图
//!
//! 使用 `plotters` 将相对占比绘制为柱状图。
//!
//! ## 功能
//! - 每个任务一根柱子，纵轴为占比 (%)
//! - 柱顶标注百分比
//! - 支持 PNG 和 SVG 输出（按扩展名）
//!
//! ## 依赖关系
//! - 被 `commands/breakdown.rs`, `commands/estimate.rs` 调用
//! - 使用 `engine/breakdown.rs` 的 BreakdownEntry

use crate::error::{FootprintError, Result};
use crate::models::{BreakdownEntry, BreakdownMode, TaskType};

use plotters::prelude::*;
use std::path::Path;

/// 图表尺寸
#[derive(Debug, Clone, Copy)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        ChartSize {
            width: 1200,
            height: 800,
        }
    }
}

/// 生成占比柱状图，扩展名为 .svg 时输出 SVG，否则输出 PNG
pub fn generate_breakdown_plot(
    entries: &[BreakdownEntry],
    mode: BreakdownMode,
    output_path: &Path,
    title: &str,
    size: ChartSize,
) -> Result<()> {
    if entries.is_empty() {
        return Err(FootprintError::InvalidArgument(
            "Nothing to plot: breakdown is empty".to_string(),
        ));
    }

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_breakdown_chart(&root, entries, mode, title)?;
        root.present()
            .map_err(|e| FootprintError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (size.width, size.height)).into_drawing_area();
        draw_breakdown_chart(&root, entries, mode, title)?;
        root.present()
            .map_err(|e| FootprintError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制柱状图核心逻辑
fn draw_breakdown_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    entries: &[BreakdownEntry],
    mode: BreakdownMode,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| FootprintError::PlotError(format!("{:?}", e)))?;

    let n = entries.len() as u32;
    let max_share = entries
        .iter()
        .map(|e| e.share * 100.0)
        .fold(0.0_f64, f64::max);
    let y_max = (max_share * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), 0.0..y_max)
        .map_err(|e| FootprintError::PlotError(format!("{:?}", e)))?;

    let y_desc = match mode {
        BreakdownMode::Energy => "Share of energy (%)",
        BreakdownMode::Carbon => "Share of CO₂ emissions (%)",
    };

    let label_for = |v: &SegmentValue<u32>| -> String {
        match v {
            SegmentValue::CenterOf(i) => entries
                .get(*i as usize)
                .map(|e| e.task.name().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&label_for)
        .y_desc(y_desc)
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| FootprintError::PlotError(format!("{:?}", e)))?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, entry)| {
            let i = i as u32;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), entry.share * 100.0),
                ],
                task_color(entry.task).filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            bar
        }))
        .map_err(|e| FootprintError::PlotError(format!("{:?}", e)))?;

    // 柱顶百分比
    let text_style = ("sans-serif", 14).into_font().color(&BLACK);
    chart
        .draw_series(entries.iter().enumerate().map(|(i, entry)| {
            Text::new(
                format!("{:.1}%", entry.share * 100.0),
                (SegmentValue::CenterOf(i as u32), entry.share * 100.0 + y_max * 0.02),
                text_style.clone(),
            )
        }))
        .map_err(|e| FootprintError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 每种任务的固定配色
fn task_color(task: TaskType) -> RGBColor {
    match task {
        TaskType::TextGeneration => RGBColor(0x8E, 0xD1, 0xE2),
        TaskType::ImageGeneration => RGBColor(0x3E, 0xB1, 0xBA),
        TaskType::CodeGeneration => RGBColor(0xF2, 0xB1, 0x84),
        TaskType::VideoGeneration => RGBColor(0x48, 0x27, 0x34),
        TaskType::AudioGeneration => RGBColor(0x26, 0x5A, 0x7C),
        TaskType::DataAnalysis => RGBColor(0x1C, 0x37, 0x4A),
        TaskType::DeepResearch => RGBColor(0xFF, 0x9A, 0x62),
    }
}
