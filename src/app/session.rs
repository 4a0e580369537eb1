// ==========================================
// 滞销库存报表 - 运行会话
// ==========================================
// 单轮: 读文件 → 归一化 → 筛选统计 → 写页面与 CSV
// 交互: 每次选择分类都完整重跑一轮（重新读文件，不缓存）
// ==========================================

use crate::app::error::{AppError, AppResult};
use crate::config::ReportConfig;
use crate::engine::{CategorySelector, DashboardSnapshot, ALL_CATEGORIES};
use crate::i18n::{t, t_with_args};
use crate::importer::load;
use crate::report::{PageMeta, ReportWriter, WrittenReport};
use chrono::Local;
use std::io::{BufRead, Write};
use tracing::{error, info, info_span};
use uuid::Uuid;

/// 交互模式退出指令
pub const QUIT_COMMAND: &str = ":q";

/// 单轮运行结果
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub selector: CategorySelector,
    pub total_rows: usize,
    pub item_count: usize,
    pub categories: Option<Vec<String>>,
    pub written: WrittenReport,
}

/// 完整运行一轮
pub fn run_once(config: &ReportConfig, selector: &CategorySelector) -> AppResult<RunSummary> {
    let run_id = Uuid::new_v4();
    let span = info_span!("report_run", %run_id, category = %selector);
    let _enter = span.enter();

    let outcome = load(&config.input_files)?;
    let collection = &outcome.collection;

    let snapshot = DashboardSnapshot::build(collection, selector);
    info!(
        rows = collection.len(),
        selected = snapshot.kpis.item_count,
        "筛选统计完成"
    );

    let meta = PageMeta {
        title: t("report.title"),
        run_id: run_id.to_string(),
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    let written = ReportWriter::new(&config.output_dir)?.write(&snapshot, &meta)?;

    Ok(RunSummary {
        run_id,
        selector: selector.clone(),
        total_rows: collection.len(),
        item_count: snapshot.kpis.item_count,
        categories: snapshot.categories.clone(),
        written,
    })
}

/// 交互模式: 每行输入一个分类，空行忽略，:q 或 EOF 结束
///
/// 单轮失败只影响该轮（不输出部分报表），会话继续等待下一次选择
pub fn run_interactive<R: BufRead, W: Write>(
    config: &ReportConfig,
    input: R,
    mut output: W,
) -> AppResult<Vec<RunSummary>> {
    let mut summaries = Vec::new();
    let mut options: Option<Vec<String>> = None;

    let initial = CategorySelector::parse(&config.category);
    run_and_report(config, &initial, &mut output, &mut options, &mut summaries)?;

    for line in input.lines() {
        let line = line?;
        let choice = line.trim();
        if choice.is_empty() {
            continue;
        }
        if choice == QUIT_COMMAND {
            break;
        }

        let selector = CategorySelector::parse(choice);
        run_and_report(config, &selector, &mut output, &mut options, &mut summaries)?;
    }

    info!(runs = summaries.len(), "交互会话结束");
    Ok(summaries)
}

fn run_and_report<W: Write>(
    config: &ReportConfig,
    selector: &CategorySelector,
    output: &mut W,
    options: &mut Option<Vec<String>>,
    summaries: &mut Vec<RunSummary>,
) -> AppResult<()> {
    match run_once(config, selector) {
        Ok(summary) => {
            writeln!(
                output,
                "{}",
                t_with_args(
                    "session.written",
                    &[
                        ("html", &summary.written.html_path.display().to_string()),
                        ("count", &summary.item_count.to_string()),
                    ],
                )
            )?;
            *options = summary.categories.clone();
            summaries.push(summary);
        }
        Err(err @ AppError::Io(_)) => return Err(err),
        Err(err) => {
            error!(error = %err, "本轮运行失败");
            writeln!(
                output,
                "{}",
                t_with_args("session.run_failed", &[("error", &err.to_string())])
            )?;
        }
    }

    let listed = match options {
        Some(categories) => std::iter::once(ALL_CATEGORIES.to_string())
            .chain(categories.iter().cloned())
            .collect::<Vec<_>>()
            .join(", "),
        None => ALL_CATEGORIES.to_string(),
    };
    writeln!(
        output,
        "{}",
        t_with_args("session.prompt", &[("options", &listed)])
    )?;
    output.flush()?;
    Ok(())
}
