//! # 统一错误处理模块
//!
//! 定义 zipsort 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个条目的错误只在各阶段内部出现，会被转换为 `Event::Failed`
//! 记录到日志；只有启动前的错误会一路传播到 `main`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// zipsort 统一错误类型
#[derive(Error, Debug)]
pub enum ZipsortError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to copy {failed} file(s) under '{path}', first error: {first}")]
    CopyFailed {
        path: String,
        failed: usize,
        first: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 压缩包错误
    // ─────────────────────────────────────────────────────────────
    #[error("Bad ZIP file '{path}': {reason}")]
    BadArchive { path: String, reason: String },

    #[error("Encrypted ZIP file '{path}' requires a password")]
    EncryptedArchive { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

impl ZipsortError {
    /// 从 I/O 错误构造读取错误，NotFound 单独映射为 FileNotFound
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ZipsortError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            ZipsortError::FileReadError {
                path: path.display().to_string(),
                source,
            }
        }
    }

    /// 从 I/O 错误构造写入错误
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        ZipsortError::FileWriteError {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ZipsortError>;
