//! # 终端报告器
//!
//! `Reporter` 的终端实现：彩色日志行输出在 `indicatif` 进度条上方，
//! 并可选地记录所有事件用于写出 CSV 报告。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::{output, progress};
use crate::models::{Event, EventRecord, Phase};
use crate::pipeline::Reporter;

use indicatif::ProgressBar;

pub struct TerminalReporter {
    pb: ProgressBar,
    current: Phase,
    /// 只输出失败行
    quiet: bool,
    journal: Option<Vec<EventRecord>>,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        let pb = if quiet {
            progress::create_hidden_bar()
        } else {
            progress::create_progress_bar(0, "")
        };
        Self {
            pb,
            current: Phase::Idle,
            quiet,
            journal: None,
        }
    }

    /// 记录所有事件
    pub fn with_journal(mut self) -> Self {
        self.journal = Some(Vec::new());
        self
    }

    /// 结束进度条并取出事件记录
    pub fn finish(self) -> Vec<EventRecord> {
        self.pb.finish_and_clear();
        self.journal.unwrap_or_default()
    }
}

impl Reporter for TerminalReporter {
    fn phase(&mut self, phase: Phase) {
        if phase == self.current {
            return;
        }
        self.current = phase;
        self.pb.set_message(phase.to_string());
        if !self.quiet && phase != Phase::Done {
            self.pb
                .suspend(|| output::print_phase(&capitalize(&phase.to_string())));
        }
    }

    fn set_total(&mut self, total: u64) {
        self.pb.set_length(total.max(self.pb.position()));
    }

    fn log(&mut self, event: &Event) {
        if let Some(journal) = self.journal.as_mut() {
            journal.push(EventRecord::from(event));
        }
        if self.quiet && !event.is_failure() {
            return;
        }
        self.pb.suspend(|| output::print_event(event));
    }

    fn advance(&mut self) {
        progress::advance(&self.pb);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_journal_records_events() {
        let mut reporter = TerminalReporter::new(true).with_journal();
        reporter.phase(Phase::Staging);
        reporter.log(&Event::CopiedFile {
            from: PathBuf::from("src/a.zip"),
            to: PathBuf::from("Extracted/a.zip"),
        });
        reporter.advance();

        let records = reporter.finish();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "src/a.zip");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("unpacking"), "Unpacking");
        assert_eq!(capitalize(""), "");
    }
}
