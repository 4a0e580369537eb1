// ==========================================
// 滞销库存报表 - 命令行入口
// ==========================================
// 用法:
//   dead-stock-report [--category NAME] [--out DIR] [--interactive] [FILES...]
// ==========================================

use anyhow::Context;
use clap::Parser;
use dead_stock_report::app::{run_interactive, run_once, CliArgs};
use dead_stock_report::engine::CategorySelector;
use dead_stock_report::logging;
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init();

    let args = CliArgs::parse();
    let interactive = args.interactive;
    let config = args.into_config();

    tracing::info!(
        version = dead_stock_report::VERSION,
        files = config.input_files.len(),
        output = %config.output_dir.display(),
        "{}",
        dead_stock_report::APP_NAME
    );

    if interactive {
        let stdin = io::stdin();
        let runs = run_interactive(&config, stdin.lock(), io::stdout())
            .context("交互会话异常结束")?;
        tracing::info!(runs = runs.len(), "已退出");
    } else {
        let selector = CategorySelector::parse(&config.category);
        let summary = run_once(&config, &selector).context("报表生成失败")?;
        println!("{}", summary.written.html_path.display());
        println!("{}", summary.written.csv_path.display());
    }

    Ok(())
}
