//! # unpack 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/unpack.rs`

use clap::Args;
use std::path::PathBuf;

/// unpack 子命令参数
#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// Directory to unpack in place
    pub dir: PathBuf,

    /// Delete each archive after it is unpacked (archives are kept by default)
    #[arg(long, default_value_t = false)]
    pub remove_archives: bool,

    /// Only print failures
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
