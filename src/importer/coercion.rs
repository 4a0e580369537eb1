// ==========================================
// 滞销库存报表 - 数值强制转换
// ==========================================
// 规则: 数值列单元格不可解析 → 0（静默兜底，不报错不中断）
// 统计: 每列记录被兜底的单元格数量，作为数据质量提示
// ==========================================

use crate::domain::{CellValue, Column};
use serde::Serialize;
use std::collections::BTreeMap;

/// 尝试把单元格解析为有限数值
///
/// - Number: 有限值原样返回
/// - Text: 去首尾空格后按浮点解析（NaN/inf 视为不可解析）
/// - Bool: true → 1, false → 0
/// - Empty / Date: 不可解析
pub fn parse_numeric(cell: &CellValue) -> Option<f64> {
    let value = match cell {
        CellValue::Number(v) => *v,
        CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
        CellValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        CellValue::Empty | CellValue::Date(_) => return None,
    };

    value.is_finite().then_some(value)
}

/// 数值强制转换：不可解析时兜底为 0
pub fn coerce_numeric(cell: &CellValue) -> f64 {
    parse_numeric(cell).unwrap_or(0.0)
}

// ==========================================
// CoercionReport - 兜底统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnCoercion {
    /// 空单元格（缺失）
    pub missing: usize,

    /// 非空但无法解析（例如 "N/A"）
    pub invalid: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoercionReport {
    pub columns: BTreeMap<Column, ColumnCoercion>,
}

impl CoercionReport {
    /// 转换一个单元格并计入统计
    pub fn coerce(&mut self, column: Column, cell: &CellValue) -> f64 {
        match parse_numeric(cell) {
            Some(v) => v,
            None => {
                let entry = self.columns.entry(column).or_default();
                if cell.is_empty() {
                    entry.missing += 1;
                } else {
                    entry.invalid += 1;
                }
                0.0
            }
        }
    }

    pub fn total_invalid(&self) -> usize {
        self.columns.values().map(|c| c.invalid).sum()
    }

    pub fn total_missing(&self) -> usize {
        self.columns.values().map(|c| c.missing).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_invalid() == 0 && self.total_missing() == 0
    }
}
