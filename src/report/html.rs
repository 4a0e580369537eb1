// ==========================================
// 滞销库存报表 - 页面渲染
// ==========================================
// 模板: templates/dashboard.html（tera，.html 自动转义）
// 输入: DashboardSnapshot（只读），不做任何统计计算
// ==========================================

use crate::engine::DashboardSnapshot;
use crate::engine::{Projection, ALL_CATEGORIES, CHART_LIMIT, PRIORITY_LIMIT};
use crate::i18n::{current_locale, t, t_with_args};
use crate::report::chart::{BarChart, PieChart};
use crate::report::csv_export::EXPORT_FILE_NAME;
use crate::report::error::ReportResult;
use crate::report::format::{format_cell, format_count, format_decimal};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

const TEMPLATE_NAME: &str = "dashboard.html";
const TEMPLATE_SOURCE: &str = include_str!("templates/dashboard.html");

/// KPI 卡片数量（前三个有内容）
const KPI_SLOTS: usize = 5;

// ==========================================
// 页面上下文
// ==========================================
#[derive(Debug, Clone, Serialize)]
struct Labels {
    select_category: String,
    no_category_column: String,
    priority: String,
    top_items: String,
    by_category: String,
    detail: String,
    download: String,
}

#[derive(Debug, Clone, Serialize)]
struct SelectorOption {
    label: String,
    active: bool,
}

#[derive(Debug, Clone, Serialize)]
struct SelectorContext {
    enabled: bool,
    options: Vec<SelectorOption>,
}

#[derive(Debug, Clone, Default, Serialize)]
struct KpiCard {
    caption: String,
    value: String,
}

#[derive(Debug, Clone, Serialize)]
struct TableContext {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl From<&Projection> for TableContext {
    fn from(projection: &Projection) -> Self {
        Self {
            headers: projection.headers(),
            rows: projection
                .rows
                .iter()
                .map(|row| row.iter().map(format_cell).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PageContext {
    lang: String,
    title: String,
    labels: Labels,
    selector: SelectorContext,
    kpis: Vec<KpiCard>,
    priority: Option<TableContext>,
    bar_chart: Option<BarChart>,
    pie_chart: Option<PieChart>,
    detail: TableContext,
    export_file: &'static str,
    generated_at: String,
    run_id: String,
}

/// 页面元信息（由调用方提供）
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub run_id: String,
    pub generated_at: String,
}

// ==========================================
// HtmlRenderer
// ==========================================
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    pub fn new() -> ReportResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE_SOURCE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, snapshot: &DashboardSnapshot<'_>, meta: &PageMeta) -> ReportResult<String> {
        let page = build_page(snapshot, meta)?;
        let context = Context::from_serialize(&page)?;
        let html = self.tera.render(TEMPLATE_NAME, &context)?;

        debug!(bytes = html.len(), "页面渲染完成");
        Ok(html)
    }
}

fn build_page(snapshot: &DashboardSnapshot<'_>, meta: &PageMeta) -> ReportResult<PageContext> {
    let priority_n = PRIORITY_LIMIT.to_string();
    let chart_n = CHART_LIMIT.to_string();

    let labels = Labels {
        select_category: t("report.select_category"),
        no_category_column: t("report.no_category_column"),
        priority: t_with_args("report.section.priority", &[("n", &priority_n)]),
        top_items: t_with_args("report.section.top_items", &[("n", &chart_n)]),
        by_category: t("report.section.by_category"),
        detail: t("report.section.detail"),
        download: t("report.download"),
    };

    let bar_chart = snapshot
        .chart_items
        .as_ref()
        .map(|items| BarChart::render(items))
        .transpose()?;
    let pie_chart = snapshot
        .breakdown
        .as_ref()
        .map(|totals| PieChart::render(totals))
        .transpose()?;

    Ok(PageContext {
        lang: current_locale(),
        title: meta.title.clone(),
        labels,
        selector: selector_context(snapshot),
        kpis: kpi_cards(snapshot),
        priority: snapshot.priority.as_ref().map(TableContext::from),
        bar_chart,
        pie_chart,
        detail: TableContext::from(&snapshot.detail),
        export_file: EXPORT_FILE_NAME,
        generated_at: t_with_args("report.generated_at", &[("time", &meta.generated_at)]),
        run_id: meta.run_id.clone(),
    })
}

fn selector_context(snapshot: &DashboardSnapshot<'_>) -> SelectorContext {
    match &snapshot.categories {
        None => SelectorContext {
            enabled: false,
            options: Vec::new(),
        },
        Some(categories) => {
            let active = snapshot.selector.label();
            let options = std::iter::once(ALL_CATEGORIES)
                .chain(categories.iter().map(String::as_str))
                .map(|label| SelectorOption {
                    label: label.to_string(),
                    active: label == active,
                })
                .collect();
            SelectorContext {
                enabled: true,
                options,
            }
        }
    }
}

fn kpi_cards(snapshot: &DashboardSnapshot<'_>) -> Vec<KpiCard> {
    let missing = t("report.not_available");
    let kpis = &snapshot.kpis;

    let mut cards = vec![
        KpiCard {
            caption: t("report.kpi.items"),
            value: format_count(kpis.item_count),
        },
        KpiCard {
            caption: t("report.kpi.stock_qty"),
            value: kpis
                .total_stock
                .map(|v| format_decimal(v, 0))
                .unwrap_or_else(|| missing.clone()),
        },
        KpiCard {
            caption: t("report.kpi.stock_value"),
            value: kpis
                .total_stock_value
                .map(|v| format_decimal(v, 2))
                .unwrap_or_else(|| missing.clone()),
        },
    ];
    cards.resize(KPI_SLOTS, KpiCard::default());
    cards
}
