// ==========================================
// 滞销库存报表 - 图表
// ==========================================
// 横向柱状图: Top 20 按 Stock Value，最大值在最上方，Reds 色阶按金额着色
// 饼图: 分类金额占比，标注分类名 + 百分比
// plotters 渲染为 SVG 字符串，页面内联
// ==========================================

use crate::domain::{Column, ItemRecord, PRIORITY_COLUMNS};
use crate::engine::CategoryTotal;
use crate::report::error::{ReportError, ReportResult};
use crate::report::format::{format_cell, format_decimal};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;

/// Reds 色阶（浅 → 深）
pub const REDS: [(u8, u8, u8); 9] = [
    (255, 245, 240),
    (254, 224, 210),
    (252, 187, 161),
    (252, 146, 114),
    (251, 106, 74),
    (239, 59, 44),
    (203, 24, 29),
    (165, 15, 21),
    (103, 0, 13),
];

/// 在 Reds 色阶上按 t ∈ [0, 1] 线性插值
pub fn reds_scale(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (REDS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(REDS.len() - 1);
    let frac = scaled - lower as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = REDS[lower];
    let (r1, g1, b1) = REDS[upper];
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

fn chart_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

// ==========================================
// 横向柱状图
// ==========================================
const BAR_CHART_WIDTH: u32 = 960;
const BAR_ROW_HEIGHT: u32 = 26;
const BAR_LABEL_AREA: u32 = 260;
const BAR_AXIS_AREA: u32 = 30;
const BAR_MARGIN: u32 = 12;
/// 柱子上下留白（单位: 行）
const BAR_GAP: f64 = 0.15;

/// 柱子所在行的悬浮区域（像素坐标，与 SVG 对齐）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarHotspot {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub width: u32,
    pub height: u32,
    pub svg: String,
    pub hotspots: Vec<BarHotspot>,
}

impl BarChart {
    /// items 已按 Stock Value 降序
    pub fn render(items: &[&ItemRecord]) -> ReportResult<Self> {
        let values: Vec<f64> = items
            .iter()
            .map(|r| r.number(Column::StockValue).unwrap_or(0.0).max(0.0))
            .collect();
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        let x_max = if max > 0.0 { max * 1.15 } else { 1.0 };

        let rows = items.len().max(1);
        let width = BAR_CHART_WIDTH;
        let height = rows as u32 * BAR_ROW_HEIGHT + BAR_AXIS_AREA + 2 * BAR_MARGIN;

        let mut svg = String::new();
        let mut hotspots = Vec::with_capacity(items.len());
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(BAR_MARGIN)
                .x_label_area_size(BAR_AXIS_AREA)
                .y_label_area_size(BAR_LABEL_AREA)
                .build_cartesian_2d(0f64..x_max, 0f64..rows as f64)
                .map_err(chart_error)?;

            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_label_formatter(&|_: &f64| String::new())
                .x_labels(5)
                .x_label_formatter(&|v: &f64| format_decimal(*v, 0))
                .draw()
                .map_err(chart_error)?;

            let label_style =
                TextStyle::from(("sans-serif", 12).into_font()).pos(Pos::new(HPos::Right, VPos::Center));
            let value_style =
                TextStyle::from(("sans-serif", 11).into_font()).pos(Pos::new(HPos::Left, VPos::Center));

            for (i, (record, value)) in items.iter().zip(values.iter()).enumerate() {
                // 第一名在最上方
                let top = (rows - i) as f64;
                let bottom = top - 1.0;
                let ratio = if max > 0.0 { value / max } else { 0.0 };

                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(0.0, bottom + BAR_GAP), (*value, top - BAR_GAP)],
                        reds_scale(ratio).filled(),
                    )))
                    .map_err(chart_error)?;

                let (x_start, y_top) = chart.backend_coord(&(0.0, top));
                let (x_end, y_bottom) = chart.backend_coord(&(*value, bottom));
                let y_mid = (y_top + y_bottom) / 2;

                let name = record
                    .cell(Column::ItemName)
                    .map(format_cell)
                    .unwrap_or_default();
                root.draw(&Text::new(name, (x_start - 6, y_mid), label_style.clone()))
                    .map_err(chart_error)?;
                root.draw(&Text::new(
                    format_decimal(*value, 2),
                    (x_end + 4, y_mid),
                    value_style.clone(),
                ))
                .map_err(chart_error)?;

                hotspots.push(BarHotspot {
                    left: 0,
                    top: y_top,
                    width: width as i32,
                    height: y_bottom - y_top,
                    tooltip: bar_tooltip(record),
                });
            }

            root.present().map_err(chart_error)?;
        }

        Ok(Self {
            width,
            height,
            svg,
            hotspots,
        })
    }
}

/// 悬浮提示: 高优先级列 + 绘图用库存数量
fn bar_tooltip(record: &ItemRecord) -> String {
    let mut lines: Vec<String> = PRIORITY_COLUMNS
        .iter()
        .filter_map(|column| {
            record
                .cell(*column)
                .map(|cell| format!("{}: {}", column.header(), format_cell(cell)))
        })
        .collect();
    if let Some(clean) = record.stock_clean {
        lines.push(format!("Stock (≥0): {}", format_decimal(clean, 0)));
    }
    lines.join("\n")
}

// ==========================================
// 饼图
// ==========================================
const PIE_WIDTH: u32 = 520;
const PIE_HEIGHT: u32 = 400;
const PIE_RADIUS: f64 = 140.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub width: u32,
    pub height: u32,
    pub svg: String,
    /// 参与绘制的分类（金额 > 0）
    pub categories: Vec<String>,
}

impl PieChart {
    /// 非正值的分类不参与绘制
    pub fn render(totals: &[CategoryTotal]) -> ReportResult<Self> {
        let positive: Vec<&CategoryTotal> =
            totals.iter().filter(|t| t.stock_value > 0.0).collect();

        let sizes: Vec<f64> = positive.iter().map(|t| t.stock_value).collect();
        let labels: Vec<String> = positive.iter().map(|t| t.category.clone()).collect();
        // 深色在前，避开最浅的两档
        let colors: Vec<RGBColor> = (0..positive.len())
            .map(|i| {
                let (r, g, b) = REDS[REDS.len() - 1 - (i % (REDS.len() - 2))];
                RGBColor(r, g, b)
            })
            .collect();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (PIE_WIDTH, PIE_HEIGHT)).into_drawing_area();
            root.fill(&WHITE).map_err(chart_error)?;

            if !sizes.is_empty() {
                let center = (PIE_WIDTH as i32 / 2, PIE_HEIGHT as i32 / 2);
                let radius = PIE_RADIUS;
                let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
                pie.start_angle(-90.0);
                pie.label_style(("sans-serif", 12).into_font().color(&BLACK));
                pie.percentages(("sans-serif", 11).into_font().color(&WHITE));
                root.draw(&pie).map_err(chart_error)?;
            }

            root.present().map_err(chart_error)?;
        }

        Ok(Self {
            width: PIE_WIDTH,
            height: PIE_HEIGHT,
            svg,
            categories: labels,
        })
    }
}
