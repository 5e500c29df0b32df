//! # sort 命令实现
//!
//! 将目录下可识别的文件平铺复制到各分类目录。
//!
//! ## 依赖关系
//! - 使用 `cli/sort.rs` 定义的参数
//! - 使用 `pipeline/sorter.rs`, `pipeline/tasks.rs`

use super::{require_dir, summary};
use crate::cli::sort::SortArgs;
use crate::error::Result;
use crate::models::Phase;
use crate::pipeline::{sorter, tasks, Reporter};
use crate::utils::output;
use crate::utils::reporter::TerminalReporter;

/// 执行 sort 命令
pub fn execute(args: SortArgs) -> Result<()> {
    require_dir(&args.dir)?;

    let categories = args.categories.to_set();
    output::print_header(&format!(
        "Sorting '{}' into '{}'",
        args.dir.display(),
        args.output.display()
    ));
    output::print_info(&format!("{} categories:", categories.len()));
    for category in categories.iter() {
        output::print_info(&format!(
            "{:<6} {} -> {}",
            category.name,
            category.pattern,
            category.folder
        ));
    }

    let count = tasks::count_tasks(&args.dir, &categories);
    let mut reporter = TerminalReporter::new(args.quiet);
    reporter.set_total(count.sortable);
    reporter.phase(Phase::Sorting);

    let stats = sorter::sort(&args.dir, &args.output, &categories, &mut reporter);
    reporter.phase(Phase::Done);
    reporter.finish();

    summary::print_phase_stats("Sorting", &stats);
    output::print_done(&format!("Copied {} file(s)", stats.succeeded));
    Ok(())
}
