// ==========================================
// 滞销库存报表 - 领域模型层
// ==========================================
// 职责: 列定义、单元格、库存行与集合
// 红线: 不含文件读取逻辑,不含统计逻辑
// ==========================================

pub mod column;
pub mod item;

// 重导出核心类型
pub use column::{Column, Schema, DETAIL_COLUMNS, NUMERIC_COLUMNS, PRIORITY_COLUMNS};
pub use item::{CellValue, ItemCollection, ItemRecord};
