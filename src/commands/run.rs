//! # run 命令实现
//!
//! 对选定文件夹执行 暂存 → 解压 → 分类。
//!
//! ## 功能
//! - 校验文件夹，不存在时直接报错（不产生任何日志）
//! - 逐条输出日志与进度
//! - 打印阶段汇总表，可选写出 CSV 事件报告
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `pipeline/`
//! - 使用 `utils/output.rs`, `utils/reporter.rs`, `utils/journal.rs`

use super::{require_dir, summary};
use crate::cli::run::RunArgs;
use crate::error::Result;
use crate::models::Layout;
use crate::pipeline::{Pipeline, UnpackOptions};
use crate::utils::reporter::TerminalReporter;
use crate::utils::{journal, output};

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    require_dir(&args.folder)?;

    let layout = Layout::new(&args.folder);
    let categories = args.categories.to_set();

    output::print_header(&format!("Processing '{}'", args.folder.display()));
    output::print_info(&format!("Working area: {}", layout.extracted.display()));
    output::print_info(&format!("Output: {}", layout.merged.display()));

    let mut reporter = TerminalReporter::new(args.quiet);
    if args.report.is_some() {
        reporter = reporter.with_journal();
    }

    let pipeline = Pipeline::new(
        layout,
        categories,
        // 工作目录中的压缩包只是副本，解压后默认删除
        UnpackOptions {
            remove_archives: !args.keep_archives,
        },
    );
    let outcome = pipeline.run(&mut reporter)?;
    let records = reporter.finish();

    summary::print_outcome(&outcome);

    if let Some(ref path) = args.report {
        journal::write_csv(&records, path)?;
        output::print_success(&format!("Event report saved to '{}'", path.display()));
    }

    output::print_done("Process completed successfully!");
    Ok(())
}
