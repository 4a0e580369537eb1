// ==========================================
// 滞销库存报表 - 运行参数
// ==========================================
// 默认值: 固定的三个输入文件 / 当前目录输出 / 分类 All
// 仅命令行可覆盖；无配置文件、无环境变量
// ==========================================

use crate::engine::ALL_CATEGORIES;
use std::path::PathBuf;

/// 默认输入文件（按顺序合并）
pub const DEFAULT_INPUT_FILES: [&str; 3] =
    ["dead_stock1.xlsx", "dead_stock2.xlsx", "dead_stock3.xlsx"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// 输入文件（按顺序合并）
    pub input_files: Vec<PathBuf>,

    /// 页面与 CSV 的输出目录
    pub output_dir: PathBuf,

    /// 初始分类选择
    pub category: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_files: DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect(),
            output_dir: PathBuf::from("."),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}
