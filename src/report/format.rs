// ==========================================
// 滞销库存报表 - 数值格式化
// ==========================================
// KPI: 千分位（件数 0 位、数量 0 位、金额 2 位）
// 表格: 整数不带小数，其余保留 2 位
// ==========================================

use crate::domain::CellValue;
use num_format::{Locale, ToFormattedString};

/// 千分位整数，例如 12345 → "12,345"
pub fn format_count(value: usize) -> String {
    value.to_formatted_string(&Locale::en)
}

/// 千分位 + 固定小数位，例如 (-1234.5, 2) → "-1,234.50"
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    // 四舍五入为 0 时不输出 "-0"
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}{}", sign, group_thousands(int_part)),
    }
}

fn group_thousands(digits: &str) -> String {
    digits
        .parse::<u128>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| digits.to_string())
}

/// 表格单元格展示文本
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Number(v) if v.fract() == 0.0 => format!("{:.0}", v),
        CellValue::Number(v) => format!("{:.2}", v),
        other => other.to_string(),
    }
}
