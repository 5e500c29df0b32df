//! # 目录列举
//!
//! 一次性列出目录的直接子项。单个条目读取失败不会丢弃整个列表，
//! 而是与成功的条目一起返回，由调用方逐条记录。
//!
//! ## 依赖关系
//! - 被 `pipeline/stager.rs`, `pipeline/unpacker.rs` 使用

use crate::error::{Result, ZipsortError};

use std::fs;
use std::path::{Path, PathBuf};

/// 目录列举结果
#[derive(Debug, Default)]
pub struct Listing {
    /// 子项路径（按名称排序）
    pub paths: Vec<PathBuf>,
    /// 无法读取的条目
    pub errors: Vec<ZipsortError>,
}

/// 列出 `dir` 的直接子项；目录本身无法打开时返回错误
pub fn list_dir(dir: &Path) -> Result<Listing> {
    let mut listing = Listing::default();
    for entry in fs::read_dir(dir).map_err(|e| ZipsortError::read(dir, e))? {
        match entry {
            Ok(e) => listing.paths.push(e.path()),
            Err(e) => listing.errors.push(ZipsortError::read(dir, e)),
        }
    }
    listing.paths.sort();
    Ok(listing)
}
