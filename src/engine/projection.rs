// ==========================================
// 滞销库存报表 - 列投影
// ==========================================
// 白名单 ∩ 实际存在列，保持白名单顺序
// 明细表与 CSV 导出共用同一投影（列集、行集完全一致）
// ==========================================

use crate::domain::{CellValue, Column, ItemRecord, Schema};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Projection {
    pub fn build(schema: &Schema, records: &[&ItemRecord], allow_list: &[Column]) -> Self {
        let columns = schema.present(allow_list);
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.cell(*column).cloned().unwrap_or(CellValue::Empty))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PRIORITY_COLUMNS;
    use std::collections::HashMap;

    #[test]
    fn test_projection_filters_and_orders_columns() {
        let schema = Schema::new(vec![
            "Stock Value".to_string(),
            "Item Name".to_string(),
            "Internal Note".to_string(),
        ]);
        let mut cells = HashMap::new();
        cells.insert("Stock Value".to_string(), CellValue::Number(9.5));
        cells.insert("Item Name".to_string(), CellValue::Text("Oud".to_string()));
        cells.insert("Internal Note".to_string(), CellValue::Text("x".to_string()));
        let record = ItemRecord::new(0, cells);

        let projection = Projection::build(&schema, &[&record], &PRIORITY_COLUMNS);

        assert_eq!(projection.headers(), vec!["Item Name", "Stock Value"]);
        assert_eq!(
            projection.rows,
            vec![vec![
                CellValue::Text("Oud".to_string()),
                CellValue::Number(9.5)
            ]]
        );
    }
}
