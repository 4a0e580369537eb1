// ==========================================
// 滞销库存报表 - 核心库
// ==========================================
// 流程: 读取表格文件 → 合并归一化 → 按分类筛选统计 → 输出 HTML 页面与 CSV
// 每次选择分类都从文件完整重跑，不保留跨轮状态
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 列定义与记录
pub mod domain;

// 导入层 - 文件解析、合并、数值清洗
pub mod importer;

// 引擎层 - 筛选、KPI、排行、分类汇总
pub mod engine;

// 输出层 - 页面渲染与 CSV 导出
pub mod report;

// 配置层
pub mod config;

// 应用层 - 单轮/交互运行
pub mod app;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{CellValue, Column, ItemCollection, ItemRecord, Schema};

pub use engine::{CategorySelector, DashboardSnapshot, KpiSummary};

pub use importer::{load, LoadError};

pub use config::ReportConfig;

pub use app::{run_interactive, run_once, AppError, RunSummary};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "Dead Stock Report";
