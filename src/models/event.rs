//! # 流水线事件
//!
//! 流水线阶段 (`Phase`) 与可报告事件 (`Event`)。每个事件对应日志中的一行。
//!
//! ## 状态机
//! ```text
//! Idle → Staging → Unpacking → Sorting → Done
//! ```
//! 单个条目失败只产生一条 `Event::Failed`，不会离开当前阶段。
//!
//! ## 依赖关系
//! - 被 `pipeline/` 产生，被 `utils/reporter.rs` 消费
//! - 使用 `serde` 序列化报告记录

use crate::error::ZipsortError;

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// 流水线阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Staging,
    Unpacking,
    Sorting,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Staging => write!(f, "staging"),
            Phase::Unpacking => write!(f, "unpacking"),
            Phase::Sorting => write!(f, "sorting"),
            Phase::Done => write!(f, "done"),
        }
    }
}

/// 失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// 扫描时路径已不存在
    Missing,
    /// 损坏或格式错误的压缩包
    BadArchive,
    /// 加密压缩包
    Encrypted,
    /// 其他 I/O 或复制错误
    Io,
}

impl FailureKind {
    /// 根据错误类型推断失败分类
    pub fn of(err: &ZipsortError) -> Self {
        match err {
            ZipsortError::FileNotFound { .. } | ZipsortError::DirectoryNotFound { .. } => {
                FailureKind::Missing
            }
            ZipsortError::BadArchive { .. } => FailureKind::BadArchive,
            ZipsortError::EncryptedArchive { .. } => FailureKind::Encrypted,
            _ => FailureKind::Io,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Missing => write!(f, "missing"),
            FailureKind::BadArchive => write!(f, "bad-archive"),
            FailureKind::Encrypted => write!(f, "encrypted"),
            FailureKind::Io => write!(f, "io"),
        }
    }
}

/// 可报告事件
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// 目录被暂存
    CopiedFolder { from: PathBuf, to: PathBuf },
    /// 文件（压缩包或分类文件）被暂存
    CopiedFile { from: PathBuf, to: PathBuf },
    /// 压缩包解压完成
    Extracted {
        archive: PathBuf,
        dest: PathBuf,
        files: usize,
    },
    /// 文件被分类复制
    Sorted {
        file: PathBuf,
        dest: PathBuf,
        category: String,
    },
    /// 单个条目失败（已跳过）
    Failed {
        phase: Phase,
        path: PathBuf,
        kind: FailureKind,
        error: String,
    },
}

impl Event {
    /// 由错误构造失败事件
    pub fn failed(phase: Phase, path: impl Into<PathBuf>, err: &ZipsortError) -> Self {
        Event::Failed {
            phase,
            path: path.into(),
            kind: FailureKind::of(err),
            error: err.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Event::Failed { .. })
    }

    /// 事件所属阶段
    pub fn phase(&self) -> Phase {
        match self {
            Event::CopiedFolder { .. } | Event::CopiedFile { .. } => Phase::Staging,
            Event::Extracted { .. } => Phase::Unpacking,
            Event::Sorted { .. } => Phase::Sorting,
            Event::Failed { phase, .. } => *phase,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::CopiedFolder { from, to } => write!(
                f,
                "Copied folder '{}' to '{}'.",
                from.display(),
                to.display()
            ),
            Event::CopiedFile { from, to } => write!(
                f,
                "Copied file '{}' to '{}'.",
                from.display(),
                to.display()
            ),
            Event::Extracted {
                archive,
                dest,
                files,
            } => write!(
                f,
                "Successfully extracted '{}' to '{}' ({} files).",
                archive.display(),
                dest.display(),
                files
            ),
            Event::Sorted {
                file,
                dest,
                category,
            } => write!(
                f,
                "Copied {} file '{}' to '{}'.",
                category,
                file.display(),
                dest.display()
            ),
            Event::Failed {
                path, kind, error, ..
            } => match kind {
                FailureKind::Missing => {
                    write!(f, "Error: File not found '{}'. Skipping...", path.display())
                }
                FailureKind::BadArchive => {
                    write!(f, "Error: Bad ZIP file '{}'. Skipping...", path.display())
                }
                FailureKind::Encrypted => write!(
                    f,
                    "Error: Encrypted ZIP file '{}'. Skipping...",
                    path.display()
                ),
                FailureKind::Io => write!(
                    f,
                    "Unexpected error '{}' occurred with '{}'. Skipping...",
                    error,
                    path.display()
                ),
            },
        }
    }
}

/// 报告文件中的一行
#[derive(Debug, Serialize)]
pub struct EventRecord {
    pub phase: Phase,
    pub status: &'static str,
    pub kind: Option<FailureKind>,
    pub path: String,
    pub detail: String,
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        let (path, kind, detail) = match event {
            Event::CopiedFolder { from, to } | Event::CopiedFile { from, to } => {
                (from, None, to.display().to_string())
            }
            Event::Extracted {
                archive,
                dest,
                files,
            } => (
                archive,
                None,
                format!("{} ({} files)", dest.display(), files),
            ),
            Event::Sorted { file, dest, .. } => (file, None, dest.display().to_string()),
            Event::Failed {
                path, kind, error, ..
            } => (path, Some(*kind), error.clone()),
        };

        EventRecord {
            phase: event.phase(),
            status: if event.is_failure() { "failed" } else { "ok" },
            kind,
            path: path.display().to_string(),
            detail,
        }
    }
}
