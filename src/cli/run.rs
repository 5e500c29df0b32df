//! # run 子命令 CLI 定义
//!
//! 对选定文件夹执行完整流水线
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use super::CategoryArgs;
use clap::Args;
use std::path::PathBuf;

/// run 子命令参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Folder to process; Extracted/ and Merged/ are created inside it
    pub folder: PathBuf,

    #[command(flatten)]
    pub categories: CategoryArgs,

    /// Keep archive copies in Extracted/ after they are unpacked
    #[arg(long, env = "ZIPSORT_KEEP_ARCHIVES", default_value_t = false)]
    pub keep_archives: bool,

    /// Write every log event to this CSV file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Only print failures
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
