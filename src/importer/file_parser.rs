// ==========================================
// 滞销库存报表 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xlsm/.xls/.xlsb/.ods) / CSV (.csv)
// 输出: RawTable（原始表头 + 行单元格），表头不做清洗
// ==========================================

use crate::domain::CellValue;
use crate::importer::error::{LoadError, LoadResult};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - 单个文件的原始表
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// 来源路径（日志用）
    pub source: String,

    /// 原始表头（可能带首尾空格）
    pub headers: Vec<String>,

    /// 数据行，每行长度与 headers 一致
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 数据行（已跳过完全空白的行）
    /// - Err(LoadError): 文件不存在、格式错误、无表头
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable>;
}

fn ensure_exists(path: &Path) -> LoadResult<()> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// 行宽对齐到表头长度（CSV 允许行长度不一致）
fn align_row(mut row: Vec<CellValue>, width: usize) -> Vec<CellValue> {
    row.resize(width, CellValue::Empty);
    row
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable> {
        ensure_exists(file_path)?;

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::MissingHeader(file_path.display().to_string()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|value| {
                    if value.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(value.to_string())
                    }
                })
                .collect();

            // 跳过完全空白的行
            if row.iter().all(CellValue::is_empty) {
                continue;
            }

            rows.push(align_row(row, headers.len()));
        }

        Ok(RawTable {
            source: file_path.display().to_string(),
            headers,
            rows,
        })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 只读取第一个工作表，第一行为表头
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> LoadResult<RawTable> {
        ensure_exists(file_path)?;

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::NoWorksheet(file_path.display().to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut rows_iter = range.rows();
        let header_row = rows_iter
            .next()
            .ok_or_else(|| LoadError::MissingHeader(file_path.display().to_string()))?;

        let headers: Vec<String> = header_row.iter().map(|cell| cell.to_string()).collect();

        let mut rows = Vec::new();
        for data_row in rows_iter {
            let row: Vec<CellValue> = data_row.iter().map(convert_excel_cell).collect();

            // 跳过完全空白的行
            if row.iter().all(CellValue::is_empty) {
                continue;
            }

            rows.push(align_row(row, headers.len()));
        }

        Ok(RawTable {
            source: file_path.display().to_string(),
            headers,
            rows,
        })
    }
}

/// calamine 单元格 → CellValue
fn convert_excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Excel 日期序列号 → 日期（1900 日期系统，基准 1899-12-30）
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    base.checked_add_signed(Duration::days(serial.floor() as i64))
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> LoadResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_table(path),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => ExcelParser.parse_table(path),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}
