// ==========================================
// 滞销库存报表 - 分类汇总
// ==========================================
// Category → Σ Stock Value，按分类名字母序输出
// 空分类行不参与分组
// ==========================================

use crate::domain::Column;
use crate::engine::filter::FilteredView;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub stock_value: f64,
}

/// 分类金额汇总；Category 或 Stock Value 列不存在时返回 None
pub fn category_breakdown(view: &FilteredView<'_>) -> Option<Vec<CategoryTotal>> {
    let schema = view.schema();
    if !schema.has(Column::Category) || !schema.has(Column::StockValue) {
        return None;
    }

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in view.records() {
        if let Some(category) = record.category() {
            *totals.entry(category).or_insert(0.0) +=
                record.number(Column::StockValue).unwrap_or(0.0);
        }
    }

    Some(
        totals
            .into_iter()
            .map(|(category, stock_value)| CategoryTotal {
                category,
                stock_value,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, ItemCollection, ItemRecord, Schema};
    use crate::engine::category::CategorySelector;
    use crate::engine::filter::filter;
    use std::collections::HashMap;

    fn collection(rows: &[(&str, f64)]) -> ItemCollection {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, (category, value))| {
                let mut cells = HashMap::new();
                let cell = if category.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(category.to_string())
                };
                cells.insert("Category".to_string(), cell);
                cells.insert("Stock Value".to_string(), CellValue::Number(*value));
                ItemRecord::new(i, cells)
            })
            .collect();
        ItemCollection::new(
            Schema::new(vec!["Category".to_string(), "Stock Value".to_string()]),
            records,
        )
    }

    #[test]
    fn test_breakdown_sums_per_category_alphabetically() {
        let c = collection(&[("Oud", 10.0), ("Attar", 5.0), ("Oud", 2.5)]);
        let view = filter(&c, &CategorySelector::All);

        let breakdown = category_breakdown(&view).unwrap();

        assert_eq!(
            breakdown,
            vec![
                CategoryTotal {
                    category: "Attar".to_string(),
                    stock_value: 5.0
                },
                CategoryTotal {
                    category: "Oud".to_string(),
                    stock_value: 12.5
                },
            ]
        );
        let total: f64 = breakdown.iter().map(|t| t.stock_value).sum();
        assert_eq!(total, 17.5);
    }

    #[test]
    fn test_breakdown_skips_empty_category() {
        let c = collection(&[("Oud", 10.0), ("", 99.0)]);
        let view = filter(&c, &CategorySelector::All);
        assert_eq!(category_breakdown(&view).unwrap().len(), 1);
    }

    #[test]
    fn test_breakdown_absent_columns() {
        let c = ItemCollection::new(Schema::new(vec!["Stock Value".to_string()]), vec![]);
        let view = filter(&c, &CategorySelector::All);
        assert!(category_breakdown(&view).is_none());
    }
}
