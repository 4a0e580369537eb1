// ==========================================
// 滞销库存报表 - Top-N 排行
// ==========================================
// 排序键: Stock Value 降序
// 并列: 保持原行序（稳定排序）
// Stock Value 列不存在 → None
// ==========================================

use crate::domain::{Column, ItemRecord};
use crate::engine::filter::FilteredView;
use std::cmp::Ordering;

/// 高优先级表行数
pub const PRIORITY_LIMIT: usize = 10;

/// 柱状图条目数
pub const CHART_LIMIT: usize = 20;

/// 取 Stock Value 最大的 n 条记录
pub fn top_n<'a>(view: &FilteredView<'a>, n: usize) -> Option<Vec<&'a ItemRecord>> {
    top_n_by(view, Column::StockValue, n)
}

/// 按任意数值列取最大的 n 条记录
fn top_n_by<'a>(
    view: &FilteredView<'a>,
    column: Column,
    n: usize,
) -> Option<Vec<&'a ItemRecord>> {
    if !view.schema().has(column) {
        return None;
    }

    let mut ranked: Vec<&'a ItemRecord> = view.records().to_vec();
    // sort_by 为稳定排序，并列值保持输入顺序
    ranked.sort_by(|a, b| compare_desc(a.number(column), b.number(column)));
    ranked.truncate(n);
    Some(ranked)
}

fn compare_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.unwrap_or(0.0);
    let b = b.unwrap_or(0.0);
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
