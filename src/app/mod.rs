// ==========================================
// 滞销库存报表 - 应用层
// ==========================================
// 职责: 串联 加载 → 统计 → 输出，提供单轮与交互两种运行方式
// ==========================================

pub mod cli;
pub mod error;
pub mod session;

// 重导出
pub use cli::CliArgs;
pub use error::{AppError, AppResult};
pub use session::{run_interactive, run_once, RunSummary, QUIT_COMMAND};
