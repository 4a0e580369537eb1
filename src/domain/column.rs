// ==========================================
// 滞销库存报表 - 列定义与能力查询
// ==========================================
// 职责: 已知列枚举 / 数值列集合 / 展示白名单 / Schema 存在性查询
// 红线: 列名精确匹配（去首尾空格后），不做大小写归一
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 已知列 (Column)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    ItemBarCode,
    ItemName,
    ItemNo,
    Stock,
    StockValue,
    MarginPct,
    Profit,
    Cost,
    Selling,
    LpPrice,
    LpDate,
    LpSupplier,
    Cf,
    Unit,
    Category,
    PreReturn,
    TotalSales,
}

/// 需要强制转为数值的列（不可解析 → 0）
pub const NUMERIC_COLUMNS: [Column; 8] = [
    Column::StockValue,
    Column::Stock,
    Column::Profit,
    Column::MarginPct,
    Column::TotalSales,
    Column::Cost,
    Column::Selling,
    Column::LpPrice,
];

/// 高优先级表（Top 10）展示列
pub const PRIORITY_COLUMNS: [Column; 11] = [
    Column::ItemBarCode,
    Column::ItemName,
    Column::Stock,
    Column::StockValue,
    Column::MarginPct,
    Column::Profit,
    Column::Cost,
    Column::Selling,
    Column::LpPrice,
    Column::LpDate,
    Column::LpSupplier,
];

/// 明细表 / CSV 导出列（PRIORITY_COLUMNS 的超集）
pub const DETAIL_COLUMNS: [Column; 16] = [
    Column::ItemBarCode,
    Column::ItemName,
    Column::ItemNo,
    Column::Stock,
    Column::StockValue,
    Column::MarginPct,
    Column::Profit,
    Column::Cost,
    Column::Selling,
    Column::LpPrice,
    Column::LpDate,
    Column::LpSupplier,
    Column::Cf,
    Column::Unit,
    Column::Category,
    Column::PreReturn,
];

impl Column {
    pub const ALL: [Column; 17] = [
        Column::ItemBarCode,
        Column::ItemName,
        Column::ItemNo,
        Column::Stock,
        Column::StockValue,
        Column::MarginPct,
        Column::Profit,
        Column::Cost,
        Column::Selling,
        Column::LpPrice,
        Column::LpDate,
        Column::LpSupplier,
        Column::Cf,
        Column::Unit,
        Column::Category,
        Column::PreReturn,
        Column::TotalSales,
    ];

    /// 源文件中的表头文本
    pub fn header(self) -> &'static str {
        match self {
            Column::ItemBarCode => "Item Bar Code",
            Column::ItemName => "Item Name",
            Column::ItemNo => "Item No",
            Column::Stock => "Stock",
            Column::StockValue => "Stock Value",
            Column::MarginPct => "Margin%",
            Column::Profit => "Profit",
            Column::Cost => "Cost",
            Column::Selling => "Selling",
            Column::LpPrice => "LP Price",
            Column::LpDate => "LP Date",
            Column::LpSupplier => "LP Supplier",
            Column::Cf => "CF",
            Column::Unit => "Unit",
            Column::Category => "Category",
            Column::PreReturn => "Pre Return",
            Column::TotalSales => "Total Sales",
        }
    }

    /// 由（已去空格的）表头识别已知列，精确匹配
    pub fn from_header(header: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.header() == header)
    }

    pub fn is_numeric(self) -> bool {
        NUMERIC_COLUMNS.contains(&self)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ==========================================
// Schema - 合并后表头 + 能力查询
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    headers: Vec<String>,
}

impl Schema {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers }
    }

    /// 全部列名（含未知列），按合并顺序
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// 已知列是否存在于数据中
    pub fn has(&self, column: Column) -> bool {
        self.headers.iter().any(|h| h == column.header())
    }

    /// 数据中出现的已知列，按合并顺序（未知列忽略）
    pub fn known_columns(&self) -> Vec<Column> {
        self.headers
            .iter()
            .filter_map(|h| Column::from_header(h))
            .collect()
    }

    /// 不属于已知列的表头
    pub fn unknown_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|h| Column::from_header(h).is_none())
            .map(String::as_str)
            .collect()
    }

    /// 白名单与实际存在列取交集，保持白名单顺序
    pub fn present(&self, allow_list: &[Column]) -> Vec<Column> {
        allow_list.iter().copied().filter(|c| self.has(*c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header_exact_match() {
        assert_eq!(Column::from_header("Stock Value"), Some(Column::StockValue));
        assert_eq!(Column::from_header("Margin%"), Some(Column::MarginPct));
        assert_eq!(Column::from_header("stock value"), None);
        assert_eq!(Column::from_header(" Stock"), None);
    }

    #[test]
    fn test_header_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_header(column.header()), Some(column));
        }
    }

    #[test]
    fn test_detail_is_superset_of_priority() {
        for column in PRIORITY_COLUMNS {
            assert!(DETAIL_COLUMNS.contains(&column), "{} missing", column);
        }
    }

    #[test]
    fn test_schema_present_keeps_allow_list_order() {
        let schema = Schema::new(vec![
            "Category".to_string(),
            "Stock".to_string(),
            "Item Name".to_string(),
            "Extra".to_string(),
        ]);

        assert!(schema.has(Column::Stock));
        assert!(!schema.has(Column::StockValue));
        assert_eq!(
            schema.present(&DETAIL_COLUMNS),
            vec![Column::ItemName, Column::Stock, Column::Category]
        );
        assert_eq!(
            schema.known_columns(),
            vec![Column::Category, Column::Stock, Column::ItemName]
        );
        assert_eq!(schema.unknown_headers(), vec!["Extra"]);
    }

    #[test]
    fn test_numeric_columns() {
        assert!(Column::Stock.is_numeric());
        assert!(Column::LpPrice.is_numeric());
        assert!(!Column::LpDate.is_numeric());
        assert!(!Column::Category.is_numeric());
    }
}
