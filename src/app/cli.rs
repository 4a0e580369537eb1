// ==========================================
// 滞销库存报表 - 命令行参数
// ==========================================
// 位置参数为输入文件（覆盖默认列表）
// ==========================================

use crate::config::ReportConfig;
use crate::engine::ALL_CATEGORIES;
use clap::Parser;
use std::path::PathBuf;

/// Build the dead stock dashboard page and filtered CSV from inventory exports.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "dead-stock-report", version)]
pub struct CliArgs {
    /// Category to select on the first run
    #[arg(long, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Directory receiving the page and the CSV download
    #[arg(long = "out", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Keep running and re-render for each category read from stdin
    #[arg(long)]
    pub interactive: bool,

    /// Input files merged in order (default: dead_stock1..3.xlsx)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl CliArgs {
    pub fn into_config(self) -> ReportConfig {
        let mut config = ReportConfig {
            output_dir: self.output_dir,
            category: self.category,
            ..ReportConfig::default()
        };
        if !self.files.is_empty() {
            config.input_files = self.files;
        }
        config
    }
}
