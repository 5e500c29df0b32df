//! # 任务数估计
//!
//! 统计目录树中压缩包与可分类文件的数量，作为进度条上限。
//! 嵌套压缩包中的文件在解压前不可见，因此结果只是估计值。
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs`, `commands/` 调用
//! - 使用 `walkdir` 遍历目录

use crate::models::{is_archive, CategorySet};

use std::path::Path;
use walkdir::WalkDir;

/// 目录树中的待处理文件计数
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskCount {
    pub archives: u64,
    pub sortable: u64,
}

impl TaskCount {
    pub fn total(&self) -> u64 {
        self.archives + self.sortable
    }
}

/// 统计 `root` 下的压缩包和可分类文件
pub fn count_tasks(root: &Path, categories: &CategorySet) -> TaskCount {
    let mut count = TaskCount::default();

    let files = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file());

    for entry in files {
        if is_archive(entry.path()) {
            count.archives += 1;
        } else if categories.classify(&entry.file_name().to_string_lossy()).is_some() {
            count.sortable += 1;
        }
    }

    count
}
