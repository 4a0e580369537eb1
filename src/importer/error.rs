// ==========================================
// 滞销库存报表 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 任一文件加载失败即整轮失败，不生成部分报表
// ==========================================

use thiserror::Error;

/// 加载错误类型
#[derive(Error, Debug)]
pub enum LoadError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xlsm/.xls/.xlsb/.ods/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 表结构错误 =====
    #[error("文件无工作表: {0}")]
    NoWorksheet(String),

    #[error("文件缺少表头行: {0}")]
    MissingHeader(String),

    #[error("未提供任何输入文件")]
    NoInputFiles,
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for LoadError {
    fn from(err: calamine::Error) -> Self {
        LoadError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;
