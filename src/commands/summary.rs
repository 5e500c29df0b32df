//! # 运行汇总
//!
//! 以表格形式打印各阶段的成功/失败数量。
//!
//! ## 依赖关系
//! - 被 `commands/` 各命令调用
//! - 使用 `tabled` 渲染表格

use crate::pipeline::{Outcome, PhaseStats};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 汇总表中的一行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Phase")]
    phase: String,
    #[tabled(rename = "Succeeded")]
    succeeded: usize,
    #[tabled(rename = "Skipped (errors)")]
    failed: usize,
    #[tabled(rename = "Total")]
    total: usize,
}

impl SummaryRow {
    fn new(phase: &str, stats: &PhaseStats) -> Self {
        Self {
            phase: phase.to_string(),
            succeeded: stats.succeeded,
            failed: stats.failed,
            total: stats.total(),
        }
    }
}

/// 打印整条流水线的汇总
pub fn print_outcome(outcome: &Outcome) {
    let rows = vec![
        SummaryRow::new("Staging", &outcome.staging),
        SummaryRow::new("Unpacking", &outcome.unpacking),
        SummaryRow::new("Sorting", &outcome.sorting),
    ];

    output::print_header("Summary");
    println!("{}", Table::new(&rows));
    output::print_info(&format!(
        "Progress estimate was {} task(s)",
        outcome.estimated_tasks
    ));

    if !outcome.is_clean() {
        output::print_separator();
        output::print_warning(&format!(
            "{} item(s) were skipped because of errors:",
            outcome.total_failed()
        ));
        for stats in [&outcome.staging, &outcome.unpacking, &outcome.sorting] {
            print_failures(stats);
        }
    }
}

/// 打印单个阶段的汇总
pub fn print_phase_stats(phase: &str, stats: &PhaseStats) {
    let rows = vec![SummaryRow::new(phase, stats)];
    println!("\n{}", Table::new(&rows));

    if stats.failed > 0 {
        output::print_separator();
        output::print_warning(&format!(
            "{} item(s) were skipped because of errors:",
            stats.failed
        ));
        print_failures(stats);
    }
}

fn print_failures(stats: &PhaseStats) {
    for (path, error) in &stats.failures {
        output::print_skip(&format!("{}: {}", path, error));
    }
}
