//! # 命令执行模块
//!
//! 实现各子命令：组装流水线、驱动终端报告器、输出汇总。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `pipeline/`, `models/`, `utils/`
//! - 子模块: run, unpack, sort, summary

pub mod run;
pub mod sort;
pub mod summary;
pub mod unpack;

use crate::cli::Commands;
use crate::error::{Result, ZipsortError};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run(args) => run::execute(args),
        Commands::Unpack(args) => unpack::execute(args),
        Commands::Sort(args) => sort::execute(args),
    }
}

/// 启动前校验目录
fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ZipsortError::DirectoryNotFound {
            path: path.display().to_string(),
        })
    }
}
