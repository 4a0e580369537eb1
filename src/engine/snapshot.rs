// ==========================================
// 滞销库存报表 - 看板快照
// ==========================================
// 纯函数: (集合, 选择器) → (视图, KPI, 排行, 分类汇总, 明细投影)
// 每次选择变化都重新计算，不缓存
// ==========================================

use crate::domain::{ItemCollection, ItemRecord, DETAIL_COLUMNS, PRIORITY_COLUMNS};
use crate::engine::aggregate::{category_breakdown, CategoryTotal};
use crate::engine::category::{available_categories, CategorySelector};
use crate::engine::filter::{filter, FilteredView};
use crate::engine::kpi::KpiSummary;
use crate::engine::projection::Projection;
use crate::engine::ranking::{top_n, CHART_LIMIT, PRIORITY_LIMIT};

#[derive(Debug, Clone)]
pub struct DashboardSnapshot<'a> {
    pub selector: CategorySelector,

    /// 可选分类（不含 "All"）；None 表示数据无 Category 列
    pub categories: Option<Vec<String>>,

    pub view: FilteredView<'a>,
    pub kpis: KpiSummary,

    /// Top 10 高优先级表（PRIORITY_COLUMNS 投影）
    pub priority: Option<Projection>,

    /// Top 20 柱状图条目（按 Stock Value 降序）
    pub chart_items: Option<Vec<&'a ItemRecord>>,

    pub breakdown: Option<Vec<CategoryTotal>>,

    /// 明细表与 CSV 导出共用
    pub detail: Projection,
}

impl<'a> DashboardSnapshot<'a> {
    pub fn build(collection: &'a ItemCollection, selector: &CategorySelector) -> Self {
        let schema = collection.schema();
        let view = filter(collection, selector);
        let kpis = KpiSummary::compute(&view);

        let priority = top_n(&view, PRIORITY_LIMIT)
            .map(|records| Projection::build(schema, &records, &PRIORITY_COLUMNS));
        let chart_items = top_n(&view, CHART_LIMIT);
        let breakdown = category_breakdown(&view);
        let detail = Projection::build(schema, view.records(), &DETAIL_COLUMNS);

        Self {
            selector: selector.clone(),
            categories: available_categories(collection),
            view,
            kpis,
            priority,
            chart_items,
            breakdown,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, Column, Schema};
    use std::collections::HashMap;

    fn collection() -> ItemCollection {
        let rows = [
            ("A", "X", 10.0),
            ("B", "Y", 40.0),
            ("C", "X", 30.0),
            ("D", "X", 30.0),
        ];
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, (name, category, value))| {
                let mut cells = HashMap::new();
                cells.insert("Item Name".to_string(), CellValue::Text(name.to_string()));
                cells.insert("Category".to_string(), CellValue::Text(category.to_string()));
                cells.insert("Stock Value".to_string(), CellValue::Number(*value));
                ItemRecord::new(i, cells)
            })
            .collect();
        ItemCollection::new(
            Schema::new(vec![
                "Item Name".to_string(),
                "Category".to_string(),
                "Stock Value".to_string(),
            ]),
            records,
        )
    }

    #[test]
    fn test_snapshot_for_category() {
        let c = collection();
        let snapshot = DashboardSnapshot::build(&c, &CategorySelector::parse("X"));

        assert_eq!(snapshot.kpis.item_count, 3);
        assert_eq!(snapshot.kpis.total_stock_value, Some(70.0));
        assert_eq!(snapshot.kpis.total_stock, None);
        assert_eq!(snapshot.detail.row_count(), 3);
        assert_eq!(
            snapshot.detail.columns,
            vec![Column::ItemName, Column::StockValue, Column::Category]
        );

        let priority = snapshot.priority.unwrap();
        let names: Vec<String> = priority.rows.iter().map(|r| r[0].to_string()).collect();
        assert_eq!(names, vec!["C", "D", "A"]);

        let breakdown = snapshot.breakdown.unwrap();
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].stock_value, 70.0);
    }

    #[test]
    fn test_snapshot_caps_rankings() {
        let mut c = collection();
        let more: Vec<ItemRecord> = (0..25)
            .map(|i| {
                let mut cells = HashMap::new();
                cells.insert("Item Name".to_string(), CellValue::Text(format!("N{}", i)));
                cells.insert("Category".to_string(), CellValue::Text("Z".to_string()));
                cells.insert("Stock Value".to_string(), CellValue::Number(i as f64));
                ItemRecord::new(4 + i, cells)
            })
            .collect();
        let mut records = c.records().to_vec();
        records.extend(more);
        c = ItemCollection::new(c.schema().clone(), records);

        let snapshot = DashboardSnapshot::build(&c, &CategorySelector::All);

        assert_eq!(snapshot.priority.unwrap().row_count(), PRIORITY_LIMIT);
        assert_eq!(snapshot.chart_items.unwrap().len(), CHART_LIMIT);
        assert_eq!(snapshot.detail.row_count(), 29);
        assert_eq!(
            snapshot.categories,
            Some(vec!["X".to_string(), "Y".to_string(), "Z".to_string()])
        );
    }
}
