//! # 工具函数模块
//!
//! 提供美化输出、进度条、终端报告器与 CSV 事件报告。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: output, progress, reporter, journal

pub mod journal;
pub mod output;
pub mod progress;
pub mod reporter;
