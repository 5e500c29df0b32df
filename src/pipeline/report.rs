//! # 报告接口
//!
//! 流水线只通过 `Reporter` 与外界交互：阶段切换、进度上限、日志和进度。
//! 终端实现见 `utils/reporter.rs`；`Recorder` 在内存中记录，用于测试。
//!
//! ## 依赖关系
//! - 被 `pipeline/` 各阶段调用
//! - 使用 `models/event.rs`

use crate::models::{Event, Phase};

/// 流水线的报告接口
pub trait Reporter {
    /// 阶段切换
    fn phase(&mut self, _phase: Phase) {}

    /// 设置进度上限（仅为估计值）
    fn set_total(&mut self, _total: u64) {}

    /// 记录一行日志
    fn log(&mut self, event: &Event);

    /// 前进一步
    fn advance(&mut self);
}

/// 内存记录器
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    pub phases: Vec<Phase>,
    pub events: Vec<Event>,
    pub total: Option<u64>,
    pub progress: u64,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有失败事件
    pub fn failures(&self) -> Vec<&Event> {
        self.events.iter().filter(|e| e.is_failure()).collect()
    }

    /// 成功解压的次数
    pub fn extractions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Extracted { .. }))
            .count()
    }
}

#[cfg(test)]
impl Reporter for Recorder {
    fn phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    fn set_total(&mut self, total: u64) {
        self.total = Some(total);
    }

    fn log(&mut self, event: &Event) {
        self.events.push(event.clone());
    }

    fn advance(&mut self) {
        self.progress += 1;
    }
}
