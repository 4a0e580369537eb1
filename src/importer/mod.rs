// ==========================================
// 滞销库存报表 - 导入层
// ==========================================
// 职责: 读取多个表格文件 → 合并 → 数值兜底 → ItemCollection
// 支持: Excel, CSV
// ==========================================

pub mod coercion;
pub mod error;
pub mod file_parser;
pub mod loader;
pub mod normalizer;

// 重导出核心类型
pub use coercion::{coerce_numeric, parse_numeric, CoercionReport, ColumnCoercion};
pub use error::{LoadError, LoadResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawTable, UniversalFileParser};
pub use loader::load;
pub use normalizer::{NormalizeOutcome, Normalizer};
