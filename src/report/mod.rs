// ==========================================
// 滞销库存报表 - 输出层
// ==========================================
// 职责: KPI/表格/图表页面渲染 + CSV 导出
// 红线: 只消费 DashboardSnapshot，不做统计
// ==========================================

pub mod chart;
pub mod csv_export;
pub mod error;
pub mod format;
pub mod html;
pub mod writer;

pub use chart::{BarChart, PieChart};
pub use csv_export::{to_csv_bytes, write_projection, EXPORT_FILE_NAME};
pub use error::{ReportError, ReportResult};
pub use html::{HtmlRenderer, PageMeta};
pub use writer::{ReportWriter, WrittenReport, PAGE_FILE_NAME};
