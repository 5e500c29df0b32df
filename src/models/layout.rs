//! # 目录布局
//!
//! 由用户选定的文件夹推导工作目录与输出目录。
//!
//! ```text
//! <root>/
//!   ├── Extracted/   (暂存 + 原地解压)
//!   └── Merged/      (按分类合并的输出)
//! ```
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs`, `pipeline/stager.rs` 使用

use std::path::{Path, PathBuf};

/// 工作目录名
pub const EXTRACTED_DIR: &str = "Extracted";
/// 输出目录名
pub const MERGED_DIR: &str = "Merged";

/// 一次运行涉及的目录
#[derive(Debug, Clone)]
pub struct Layout {
    /// 用户选定的源目录
    pub source: PathBuf,
    /// 暂存与解压的工作目录
    pub extracted: PathBuf,
    /// 分类输出根目录
    pub merged: PathBuf,
}

impl Layout {
    pub fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            extracted: source.join(EXTRACTED_DIR),
            merged: source.join(MERGED_DIR),
        }
    }

    /// 是否为本工具自身生成的目录（暂存时需排除）
    pub fn is_own_output(&self, path: &Path) -> bool {
        path == self.extracted || path == self.merged
    }
}
