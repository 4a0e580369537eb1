// ==========================================
// 滞销库存报表 - 输出层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("页面模板渲染失败: {0}")]
    Template(#[from] tera::Error),

    #[error("CSV 导出失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("图表绘制失败: {0}")]
    Chart(String),

    #[error("文件写入失败 ({path}): {message}")]
    Write { path: String, message: String },

    #[error("导出内容编码失败: {0}")]
    Encoding(String),
}

pub type ReportResult<T> = Result<T, ReportError>;
