// ==========================================
// 滞销库存报表 - 配置层
// ==========================================
// 职责: 输入文件列表、输出目录、初始分类
// ==========================================

pub mod report_config;

pub use report_config::{ReportConfig, DEFAULT_INPUT_FILES};
