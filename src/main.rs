//! # zipsort - 嵌套压缩包解压与文件分类工具
//!
//! 将选定文件夹中的目录与压缩包暂存到 `Extracted/`，逐层解压所有嵌套的
//! zip 压缩包，再把 CSV / PDF 等文件平铺复制到 `Merged/` 下的分类目录。
//!
//! ## 子命令
//! - `run`    - 完整流水线（暂存 → 解压 → 分类）
//! - `unpack` - 仅原地解压
//! - `sort`   - 仅分类复制
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── pipeline/  (暂存、解压、分类)
//!   │     └── models/    (分类规则、目录布局、事件)
//!   ├── utils/      (输出、进度条、终端报告器)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod pipeline;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
