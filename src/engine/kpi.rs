// ==========================================
// 滞销库存报表 - KPI 汇总
// ==========================================
// 件数: 视图行数（精确整数）
// 库存数量: 原始 Stock 求和（可为负，不使用 stock_clean）
// 库存金额: Stock Value 求和
// 列不存在 → None（区别于"存在但为 0"）
// ==========================================

use crate::domain::Column;
use crate::engine::filter::FilteredView;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSummary {
    pub item_count: usize,
    pub total_stock: Option<f64>,
    pub total_stock_value: Option<f64>,
}

impl KpiSummary {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        Self {
            item_count: view.len(),
            total_stock: sum_column(view, Column::Stock),
            total_stock_value: sum_column(view, Column::StockValue),
        }
    }
}

/// 对数值列求和；列不存在返回 None，单元格缺失按 0
pub fn sum_column(view: &FilteredView<'_>, column: Column) -> Option<f64> {
    if !view.schema().has(column) {
        return None;
    }
    Some(
        view.records()
            .iter()
            .map(|record| record.number(column).unwrap_or(0.0))
            .sum(),
    )
}
