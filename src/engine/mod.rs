// ==========================================
// 滞销库存报表 - 统计引擎层
// ==========================================
// 职责: 分类筛选、KPI、Top-N 排行、分类汇总、列投影
// 红线: 纯函数，不读文件，不写文件
// ==========================================

pub mod aggregate;
pub mod category;
pub mod filter;
pub mod kpi;
pub mod projection;
pub mod ranking;
pub mod snapshot;

// 重导出核心类型
pub use aggregate::{category_breakdown, CategoryTotal};
pub use category::{available_categories, selector_options, CategorySelector, ALL_CATEGORIES};
pub use filter::{filter, FilteredView};
pub use kpi::{sum_column, KpiSummary};
pub use projection::Projection;
pub use ranking::{top_n, CHART_LIMIT, PRIORITY_LIMIT};
pub use snapshot::DashboardSnapshot;
