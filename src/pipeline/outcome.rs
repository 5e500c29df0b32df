//! # 运行结果统计
//!
//! 按阶段汇总成功与失败数量。
//!
//! ## 依赖关系
//! - 被 `pipeline/` 各阶段使用
//! - 被 `commands/summary.rs` 展示

use super::report::Reporter;
use crate::error::ZipsortError;
use crate::models::{Event, Phase};

use std::path::Path;

/// 单阶段统计
#[derive(Debug, Default, Clone)]
pub struct PhaseStats {
    /// 成功数量
    pub succeeded: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (路径, 错误信息)
    pub failures: Vec<(String, String)>,
}

impl PhaseStats {
    /// 总处理数量
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// 阶段计数器：记录结果的同时转发给 `Reporter`
pub struct Tally<'a> {
    phase: Phase,
    reporter: &'a mut dyn Reporter,
    stats: PhaseStats,
}

impl<'a> Tally<'a> {
    pub fn new(phase: Phase, reporter: &'a mut dyn Reporter) -> Self {
        Self {
            phase,
            reporter,
            stats: PhaseStats::default(),
        }
    }

    /// 记录一次成功：输出日志并前进一步
    pub fn ok(&mut self, event: Event) {
        self.reporter.log(&event);
        self.reporter.advance();
        self.stats.succeeded += 1;
    }

    /// 记录一次失败（跳过，不前进）
    pub fn fail(&mut self, path: &Path, err: &ZipsortError) {
        let event = Event::failed(self.phase, path, err);
        self.reporter.log(&event);
        self.stats.failed += 1;
        self.stats
            .failures
            .push((path.display().to_string(), err.to_string()));
    }

    pub fn finish(self) -> PhaseStats {
        self.stats
    }
}

/// 整个流水线的运行结果
#[derive(Debug, Default, Clone)]
pub struct Outcome {
    pub staging: PhaseStats,
    pub unpacking: PhaseStats,
    pub sorting: PhaseStats,
    /// 进度条使用的任务估计数
    pub estimated_tasks: u64,
}

impl Outcome {
    pub fn total_failed(&self) -> usize {
        self.staging.failed + self.unpacking.failed + self.sorting.failed
    }

    /// 没有任何条目失败
    pub fn is_clean(&self) -> bool {
        self.total_failed() == 0
    }
}
