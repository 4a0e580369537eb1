// ==========================================
// 滞销库存报表 - 归一化器
// ==========================================
// 阶段 1: 表头 TRIM → 多表合并 → 数值列兜底 → 派生 stock_clean
// 合并列序: 第一张表的列序，后续表新出现的列依次追加
// ==========================================

use crate::domain::{CellValue, Column, ItemCollection, ItemRecord, Schema};
use crate::importer::coercion::CoercionReport;
use crate::importer::file_parser::RawTable;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// 归一化输出
#[derive(Debug, Clone)]
pub struct NormalizeOutcome {
    pub collection: ItemCollection,
    pub coercion: CoercionReport,
}

pub struct Normalizer;

impl Normalizer {
    /// 去除表头首尾空格（精确匹配，不改大小写）
    pub fn trim_headers(&self, table: &mut RawTable) {
        for header in table.headers.iter_mut() {
            let trimmed = header.trim();
            if trimmed.len() != header.len() {
                *header = trimmed.to_string();
            }
        }
    }

    /// 合并多张表为行记录；缺失列补 Empty
    pub fn merge(&self, tables: &[RawTable]) -> (Schema, Vec<ItemRecord>) {
        let mut headers: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        for table in tables {
            for header in &table.headers {
                if seen.insert(header.clone()) {
                    headers.push(header.clone());
                }
            }
        }

        let mut records = Vec::new();
        for table in tables {
            for row in &table.rows {
                let mut cells: HashMap<String, CellValue> = HashMap::with_capacity(headers.len());
                for (header, cell) in table.headers.iter().zip(row.iter()) {
                    // 同一文件内重复表头: 保留第一列
                    if cells.contains_key(header) {
                        continue;
                    }
                    cells.insert(header.clone(), cell.clone());
                }
                for header in &headers {
                    cells.entry(header.clone()).or_insert(CellValue::Empty);
                }

                records.push(ItemRecord::new(records.len(), cells));
            }
        }

        (Schema::new(headers), records)
    }

    /// 对存在的数值列执行强制转换
    pub fn coerce_numeric_columns(
        &self,
        schema: &Schema,
        records: &mut [ItemRecord],
    ) -> CoercionReport {
        let mut report = CoercionReport::default();
        let numeric: Vec<Column> = schema
            .known_columns()
            .into_iter()
            .filter(|c| c.is_numeric())
            .collect();

        for record in records.iter_mut() {
            for column in &numeric {
                let cell = record
                    .cells
                    .entry(column.header().to_string())
                    .or_insert(CellValue::Empty);
                let value = report.coerce(*column, cell);
                *cell = CellValue::Number(value);
            }
        }

        report
    }

    /// 派生 stock_clean = max(Stock, 0)
    pub fn derive_stock_clean(&self, schema: &Schema, records: &mut [ItemRecord]) {
        if !schema.has(Column::Stock) {
            return;
        }
        for record in records.iter_mut() {
            let stock = record.number(Column::Stock).unwrap_or(0.0);
            record.stock_clean = Some(stock.max(0.0));
        }
    }

    /// 完整归一化流程
    pub fn normalize(&self, mut tables: Vec<RawTable>) -> NormalizeOutcome {
        for table in tables.iter_mut() {
            self.trim_headers(table);
            let mut unique = HashSet::new();
            for header in &table.headers {
                if !unique.insert(header.as_str()) {
                    warn!(source = %table.source, header = %header, "重复列名，仅保留第一列");
                }
            }
        }

        let (schema, mut records) = self.merge(&tables);
        let unknown = schema.unknown_headers();
        if !unknown.is_empty() {
            debug!(headers = ?unknown, "未识别的列，原样保留但不参与展示");
        }

        let coercion = self.coerce_numeric_columns(&schema, &mut records);
        self.derive_stock_clean(&schema, &mut records);

        debug!(
            columns = schema.headers().len(),
            rows = records.len(),
            "归一化完成"
        );

        NormalizeOutcome {
            collection: ItemCollection::new(schema, records),
            coercion,
        }
    }
}
