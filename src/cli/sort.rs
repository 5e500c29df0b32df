//! # sort 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sort.rs`

use super::CategoryArgs;
use clap::Args;
use std::path::PathBuf;

/// sort 子命令参数
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Directory to scan recursively
    pub dir: PathBuf,

    /// Destination root for the category folders
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub categories: CategoryArgs,

    /// Only print failures
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
