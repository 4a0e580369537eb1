// ==========================================
// 滞销库存报表 - 加载入口
// ==========================================
// 流程: 逐文件解析 → 归一化 → 兜底统计告警
// 红线: 任一文件失败即整体失败（不可静默丢弃批次，否则 KPI 失真）
// ==========================================

use crate::importer::error::{LoadError, LoadResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::normalizer::{NormalizeOutcome, Normalizer};
use std::path::Path;
use tracing::{info, warn};

/// 按顺序加载所有输入文件并合并
pub fn load<P: AsRef<Path>>(paths: &[P]) -> LoadResult<NormalizeOutcome> {
    if paths.is_empty() {
        return Err(LoadError::NoInputFiles);
    }

    let parser = UniversalFileParser;
    let mut tables = Vec::with_capacity(paths.len());
    for path in paths {
        let table = parser.parse(path)?;
        info!(
            file = %path.as_ref().display(),
            rows = table.row_count(),
            columns = table.headers.len(),
            "文件读取完成"
        );
        tables.push(table);
    }

    let outcome = Normalizer.normalize(tables);

    if !outcome.coercion.is_clean() {
        for (column, stats) in &outcome.coercion.columns {
            warn!(
                column = %column,
                invalid = stats.invalid,
                missing = stats.missing,
                "数值列存在空白或无法解析的单元格，已按 0 处理"
            );
        }
    }

    info!(
        files = paths.len(),
        rows = outcome.collection.len(),
        "数据合并完成"
    );

    Ok(outcome)
}
