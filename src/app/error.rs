// ==========================================
// 滞销库存报表 - 应用层错误类型
// ==========================================
// 职责: 汇总加载/输出错误，单轮运行要么全成功要么全失败
// ==========================================

use crate::importer::LoadError;
use crate::report::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("数据加载失败: {0}")]
    Load(#[from] LoadError),

    #[error("报表输出失败: {0}")]
    Report(#[from] ReportError),

    #[error("交互输入输出失败: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
