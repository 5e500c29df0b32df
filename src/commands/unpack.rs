//! # unpack 命令实现
//!
//! 在原地解压目录下的所有（嵌套）压缩包。
//!
//! ## 依赖关系
//! - 使用 `cli/unpack.rs` 定义的参数
//! - 使用 `pipeline/unpacker.rs`, `pipeline/tasks.rs`

use super::{require_dir, summary};
use crate::cli::unpack::UnpackArgs;
use crate::error::Result;
use crate::models::{CategorySet, Phase};
use crate::pipeline::{tasks, unpacker, Reporter, UnpackOptions};
use crate::utils::output;
use crate::utils::reporter::TerminalReporter;

/// 执行 unpack 命令
pub fn execute(args: UnpackArgs) -> Result<()> {
    require_dir(&args.dir)?;

    output::print_header(&format!("Unpacking '{}'", args.dir.display()));

    let count = tasks::count_tasks(&args.dir, &CategorySet::default());
    let mut reporter = TerminalReporter::new(args.quiet);
    reporter.set_total(count.archives);
    reporter.phase(Phase::Unpacking);

    let options = UnpackOptions {
        remove_archives: args.remove_archives,
    };
    let stats = unpacker::unpack(&args.dir, options, &mut reporter);
    reporter.phase(Phase::Done);
    reporter.finish();

    summary::print_phase_stats("Unpacking", &stats);
    output::print_done(&format!("Extracted {} archive(s)", stats.succeeded));
    Ok(())
}
