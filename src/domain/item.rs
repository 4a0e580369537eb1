// ==========================================
// 滞销库存报表 - 库存行与集合
// ==========================================
// ItemRecord: 一行库存明细（按表头存放单元格）
// ItemCollection: 所有批次合并后的不可变集合
// ==========================================

use crate::domain::column::{Column, Schema};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ==========================================
// CellValue - 单元格值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// 作为分组/筛选键的文本；空值返回 None
    pub fn as_key(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

// ==========================================
// ItemRecord - 库存行
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    /// 合并后的行序号（0 起），用于稳定排序
    pub row_number: usize,

    /// 表头 → 单元格（合并后每个表头都有值，缺失为 Empty）
    pub cells: HashMap<String, CellValue>,

    /// max(Stock, 0)，仅用于绘图；Stock 列不存在时为 None
    pub stock_clean: Option<f64>,
}

impl ItemRecord {
    pub fn new(row_number: usize, cells: HashMap<String, CellValue>) -> Self {
        Self {
            row_number,
            cells,
            stock_clean: None,
        }
    }

    pub fn cell(&self, column: Column) -> Option<&CellValue> {
        self.cells.get(column.header())
    }

    pub fn number(&self, column: Column) -> Option<f64> {
        self.cell(column).and_then(CellValue::as_number)
    }

    pub fn category(&self) -> Option<String> {
        self.cell(Column::Category).and_then(CellValue::as_key)
    }
}

// ==========================================
// ItemCollection - 合并后集合（归一化后不再修改）
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ItemCollection {
    schema: Schema,
    records: Vec<ItemRecord>,
}

impl ItemCollection {
    pub fn new(schema: Schema, records: Vec<ItemRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
