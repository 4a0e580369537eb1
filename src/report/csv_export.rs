// ==========================================
// 滞销库存报表 - CSV 导出
// ==========================================
// 文件名固定: dead_stock_filtered.csv（UTF-8）
// 表头 = 明细投影列（顺序一致），无索引列
// 行 = 当前筛选视图，顺序一致
// ==========================================

use crate::engine::Projection;
use crate::report::error::{ReportError, ReportResult};
use csv::Writer;
use std::io::Write;

pub const EXPORT_FILE_NAME: &str = "dead_stock_filtered.csv";

/// 写出明细投影
pub fn write_projection<W: Write>(projection: &Projection, writer: W) -> ReportResult<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(projection.headers())?;
    for row in &projection.rows {
        csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| ReportError::Encoding(e.to_string()))?;

    Ok(())
}

/// 明细投影 → UTF-8 字节
pub fn to_csv_bytes(projection: &Projection) -> ReportResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_projection(projection, &mut buffer)?;
    Ok(buffer)
}
