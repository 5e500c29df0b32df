//! # 分类阶段
//!
//! 遍历解压后的目录树，将可识别的文件平铺复制到各分类目录。
//!
//! ## 功能
//! - 先创建所有分类目录（空运行也会留下它们）
//! - 同名文件直接覆盖，不做去重
//! - 未识别的文件不复制
//! - 输出目录位于输入目录之内时，跳过各分类目录本身（避免文件复制到自身）
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录

use super::outcome::{PhaseStats, Tally};
use super::report::Reporter;
use crate::error::ZipsortError;
use crate::models::{CategorySet, Event, Phase};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 执行分类
pub fn sort(
    root: &Path,
    dest_root: &Path,
    categories: &CategorySet,
    reporter: &mut dyn Reporter,
) -> PhaseStats {
    let mut tally = Tally::new(Phase::Sorting, reporter);

    for category in categories.iter() {
        let folder = dest_root.join(&category.folder);
        if let Err(e) = fs::create_dir_all(&folder) {
            tally.fail(&folder, &ZipsortError::write(&folder, e));
        }
    }

    let outputs: Vec<PathBuf> = categories
        .iter()
        .filter_map(|c| fs::canonicalize(dest_root.join(&c.folder)).ok())
        .collect();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_output_folder(e, &outputs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
                let err = match e.into_io_error() {
                    Some(io) => ZipsortError::read(&path, io),
                    None => ZipsortError::Other(format!("Filesystem loop at '{}'", path.display())),
                };
                tally.fail(&path, &err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(category) = categories.classify(&file_name) else {
            continue;
        };

        let source = entry.path();
        let folder = dest_root.join(&category.folder);
        let target: PathBuf = folder.join(entry.file_name());

        match fs::copy(source, &target) {
            Ok(_) => tally.ok(Event::Sorted {
                file: source.to_path_buf(),
                dest: folder,
                category: category.name.clone(),
            }),
            Err(e) => {
                let err = if source.exists() {
                    ZipsortError::write(&target, e)
                } else {
                    ZipsortError::read(source, e)
                };
                tally.fail(source, &err);
            }
        }
    }

    tally.finish()
}

/// 是否为某个分类的输出目录（比较规范化路径）
fn is_output_folder(entry: &DirEntry, outputs: &[PathBuf]) -> bool {
    if outputs.is_empty() || !entry.file_type().is_dir() {
        return false;
    }
    fs::canonicalize(entry.path())
        .map(|p| outputs.contains(&p))
        .unwrap_or(false)
}
