//! # 解压阶段
//!
//! 迭代地查找并解压目录树中的所有 zip 压缩包，包括解压后才出现的嵌套压缩包。
//!
//! ## 算法
//! 以显式栈（frontier）代替递归：
//! ```text
//! frontier = [root]
//! while dir = frontier.pop():
//!     for child in list(dir):           # 一次性列出
//!         archive   → 解压到同级目录 <stem>/，压入该目录
//!         directory → 压入
//! ```
//! 调用栈深度与嵌套层数无关。
//!
//! ## 错误策略
//! 路径消失、损坏的压缩包、加密压缩包、其他 I/O 错误均只记录并跳过。
//! 删除已解压的压缩包失败时，解压本身仍计为成功，另记一条失败。
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs` 调用
//! - 使用 `zip` crate 读取压缩包

use super::listing::list_dir;
use super::outcome::{PhaseStats, Tally};
use super::report::Reporter;
use crate::error::{Result, ZipsortError};
use crate::models::{is_archive, Event, Phase};

use std::collections::HashSet;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::result::ZipError;
use zip::ZipArchive;

/// 解压选项
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpackOptions {
    /// 解压成功后删除压缩包（仅用于工作目录中的副本）
    pub remove_archives: bool,
}

/// 单个子项的处理结果
enum Visit {
    /// 压缩包已解压到该目录
    Extracted { dest: PathBuf, files: usize },
    /// 普通目录，待扫描
    Directory,
    /// 其他（普通文件、符号链接）
    Ignored,
}

/// 执行解压，直到 frontier 为空
pub fn unpack(root: &Path, options: UnpackOptions, reporter: &mut dyn Reporter) -> PhaseStats {
    let mut tally = Tally::new(Phase::Unpacking, reporter);
    let mut frontier: Vec<PathBuf> = vec![root.to_path_buf()];
    let mut scanned: HashSet<PathBuf> = HashSet::new();

    while let Some(current) = frontier.pop() {
        if !scanned.insert(current.clone()) {
            continue;
        }

        let listing = match list_dir(&current) {
            Ok(l) => l,
            Err(e) => {
                tally.fail(&current, &e);
                continue;
            }
        };
        for err in &listing.errors {
            tally.fail(&current, err);
        }

        for child in listing.paths {
            match visit(&child) {
                Ok(Visit::Extracted { dest, files }) => {
                    tally.ok(Event::Extracted {
                        archive: child.clone(),
                        dest: dest.clone(),
                        files,
                    });
                    // 删除失败时压缩包仍留在原处，下次运行会再次解压
                    if options.remove_archives {
                        if let Err(e) = remove_archive(&child) {
                            tally.fail(&child, &e);
                        }
                    }
                    frontier.push(dest);
                }
                Ok(Visit::Directory) => frontier.push(child),
                Ok(Visit::Ignored) => {}
                Err(e) => tally.fail(&child, &e),
            }
        }
    }

    tally.finish()
}

fn visit(path: &Path) -> Result<Visit> {
    // 不跟随符号链接
    let metadata = fs::symlink_metadata(path).map_err(|e| ZipsortError::read(path, e))?;

    if metadata.is_dir() {
        return Ok(Visit::Directory);
    }
    if !metadata.is_file() || !is_archive(path) {
        return Ok(Visit::Ignored);
    }

    let dest = extraction_dir(path)?;
    let files = extract_archive(path, &dest)?;
    Ok(Visit::Extracted { dest, files })
}

fn remove_archive(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| ZipsortError::write(path, e))
}

/// 压缩包的同级解压目录：`a/b.zip` → `a/b`
pub fn extraction_dir(archive: &Path) -> Result<PathBuf> {
    let stem = archive.file_stem().ok_or_else(|| {
        ZipsortError::Other(format!("Cannot derive folder name for '{}'", archive.display()))
    })?;
    Ok(archive.with_file_name(stem))
}

/// 解压单个压缩包到 `dest`，返回写出的文件数
///
/// 先完整校验（可打开、无加密条目）再创建目标目录，
/// 因此损坏的压缩包不会留下目录。
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| ZipsortError::read(archive_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| archive_error(archive_path, e))?;

    for i in 0..archive.len() {
        archive
            .by_index(i)
            .map_err(|e| archive_error(archive_path, e))?;
    }

    fs::create_dir_all(dest).map_err(|e| ZipsortError::write(dest, e))?;

    let mut count = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| archive_error(archive_path, e))?;

        // 跳过会逃逸出目标目录的条目
        let relative = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => continue,
        };
        let output_path = dest.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&output_path).map_err(|e| ZipsortError::write(&output_path, e))?;
            continue;
        }

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ZipsortError::write(parent, e))?;
        }
        let mut outfile =
            File::create(&output_path).map_err(|e| ZipsortError::write(&output_path, e))?;
        io::copy(&mut entry, &mut outfile).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                ZipsortError::BadArchive {
                    path: archive_path.display().to_string(),
                    reason: e.to_string(),
                }
            } else {
                ZipsortError::write(&output_path, e)
            }
        })?;
        count += 1;
    }

    Ok(count)
}

/// 将 `ZipError` 映射为统一错误
fn archive_error(path: &Path, err: ZipError) -> ZipsortError {
    match err {
        ZipError::Io(e) if e.kind() == io::ErrorKind::NotFound => ZipsortError::read(path, e),
        ZipError::UnsupportedArchive(msg) if msg == ZipError::PASSWORD_REQUIRED => {
            ZipsortError::EncryptedArchive {
                path: path.display().to_string(),
            }
        }
        other => ZipsortError::BadArchive {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}
