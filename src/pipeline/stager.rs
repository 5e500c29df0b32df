//! # 暂存阶段
//!
//! 将源目录下的顶层目录、压缩包以及可分类文件复制到工作目录。
//!
//! ## 功能
//! - 目录深拷贝，已存在的目标路径合并覆盖
//! - 跳过本工具自身的 `Extracted/`、`Merged/`
//! - 单个条目失败只记录日志，不影响其他条目
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录

use super::listing::list_dir;
use super::outcome::{PhaseStats, Tally};
use super::report::Reporter;
use crate::error::{Result, ZipsortError};
use crate::models::{is_archive, CategorySet, Event, Layout, Phase};

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 执行暂存
pub fn stage(layout: &Layout, categories: &CategorySet, reporter: &mut dyn Reporter) -> PhaseStats {
    let mut tally = Tally::new(Phase::Staging, reporter);

    if let Err(e) = fs::create_dir_all(&layout.extracted) {
        tally.fail(&layout.extracted, &ZipsortError::write(&layout.extracted, e));
        return tally.finish();
    }

    let listing = match list_dir(&layout.source) {
        Ok(l) => l,
        Err(e) => {
            tally.fail(&layout.source, &e);
            return tally.finish();
        }
    };
    for err in &listing.errors {
        tally.fail(&layout.source, err);
    }

    for path in listing.paths {
        if layout.is_own_output(&path) {
            continue;
        }

        let Some(name) = path.file_name() else {
            continue;
        };
        let destination = layout.extracted.join(name);

        // 跟随符号链接判断类型
        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) => {
                tally.fail(&path, &ZipsortError::read(&path, e));
                continue;
            }
        };

        if metadata.is_dir() {
            match copy_tree(&path, &destination) {
                Ok(_) => tally.ok(Event::CopiedFolder {
                    from: path.clone(),
                    to: destination,
                }),
                Err(e) => tally.fail(&path, &e),
            }
        } else if metadata.is_file() && should_stage_file(&path, categories) {
            match copy_file(&path, &destination) {
                Ok(()) => tally.ok(Event::CopiedFile {
                    from: path.clone(),
                    to: destination,
                }),
                Err(e) => tally.fail(&path, &e),
            }
        }
    }

    tally.finish()
}

/// 顶层文件只暂存压缩包和可分类文件
fn should_stage_file(path: &Path, categories: &CategorySet) -> bool {
    if is_archive(path) {
        return true;
    }
    path.file_name()
        .map(|n| categories.classify(&n.to_string_lossy()).is_some())
        .unwrap_or(false)
}

/// 复制单个文件（覆盖已存在的目标）
fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| {
        if from.exists() {
            ZipsortError::write(to, e)
        } else {
            ZipsortError::read(from, e)
        }
    })?;
    Ok(())
}

/// 递归复制目录，合并到已存在的目标目录
///
/// 遇到错误时继续复制其余文件，最后汇总为一个 `CopyFailed`。
/// 返回复制的文件数。
pub fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    let mut failed = 0;
    let mut first_error: Option<String> = None;

    for entry in WalkDir::new(from).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                failed += 1;
                first_error.get_or_insert_with(|| e.to_string());
                continue;
            }
        };

        let relative = match entry.path().strip_prefix(from) {
            Ok(r) => r,
            Err(_) => continue,
        };
        let target = to.join(relative);

        let result = if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| ZipsortError::write(&target, e))
        } else {
            copy_file(entry.path(), &target)
        };

        match result {
            Ok(()) if entry.file_type().is_file() => copied += 1,
            Ok(()) => {}
            Err(e) => {
                failed += 1;
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    match first_error {
        Some(first) => Err(ZipsortError::CopyFailed {
            path: from.display().to_string(),
            failed,
            first,
        }),
        None => Ok(copied),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::report::Recorder;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_stage_folders_archives_and_category_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("reports/q1/summary.txt"), "q1");
        write(&root.join("reports/data.csv"), "a,b");
        write(&root.join("bundle.zip"), "not really a zip");
        write(&root.join("notes.csv"), "x,y");
        write(&root.join("readme.txt"), "ignored");

        let layout = Layout::new(root);
        let mut rec = Recorder::new();
        let stats = stage(&layout, &CategorySet::default(), &mut rec);

        assert_eq!(stats.succeeded, 3);
        assert_eq!(stats.failed, 0);
        assert_eq!(rec.progress, 3);
        assert!(layout.extracted.join("reports/q1/summary.txt").is_file());
        assert!(layout.extracted.join("reports/data.csv").is_file());
        assert!(layout.extracted.join("bundle.zip").is_file());
        assert!(layout.extracted.join("notes.csv").is_file());
        assert!(!layout.extracted.join("readme.txt").exists());
    }

    #[test]
    fn test_stage_skips_own_output_dirs() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("Merged/All_CSVs/old.csv"), "old");
        write(&root.join("Extracted/previous/file.txt"), "prev");
        write(&root.join("docs/a.pdf"), "%PDF");

        let layout = Layout::new(root);
        let mut rec = Recorder::new();
        let stats = stage(&layout, &CategorySet::default(), &mut rec);

        assert_eq!(stats.succeeded, 1);
        assert!(!layout.extracted.join("Extracted").exists());
        assert!(!layout.extracted.join("Merged").exists());
        assert!(layout.extracted.join("docs/a.pdf").is_file());
    }

    #[test]
    fn test_stage_merges_into_existing_destination() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("docs/new.txt"), "new");
        write(&root.join("Extracted/docs/keep.txt"), "keep");
        write(&root.join("Extracted/docs/new.txt"), "stale");

        let layout = Layout::new(root);
        let mut rec = Recorder::new();
        stage(&layout, &CategorySet::default(), &mut rec);

        let docs = layout.extracted.join("docs");
        assert_eq!(fs::read_to_string(docs.join("keep.txt")).unwrap(), "keep");
        assert_eq!(fs::read_to_string(docs.join("new.txt")).unwrap(), "new");
    }

    #[test]
    fn test_stage_empty_source() {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        let mut rec = Recorder::new();
        let stats = stage(&layout, &CategorySet::default(), &mut rec);

        assert_eq!(stats.total(), 0);
        assert!(rec.events.is_empty());
        assert!(layout.extracted.is_dir());
    }

    #[test]
    fn test_copy_tree_counts_files() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src.join("a.txt"), "a");
        write(&src.join("nested/deeper/b.txt"), "b");

        let copied = copy_tree(&src, &dir.path().join("dst")).unwrap();
        assert_eq!(copied, 2);
        assert!(dir.path().join("dst/nested/deeper/b.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_stage_failure_does_not_stop_other_items() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("a_docs/ok.txt"), "ok");
        symlink(root.join("nowhere"), root.join("a_docs/dangling.txt")).unwrap();
        symlink(root.join("nowhere.zip"), root.join("b_missing.zip")).unwrap();
        write(&root.join("c_good.zip"), "zip bytes");

        let layout = Layout::new(root);
        let mut rec = Recorder::new();
        let stats = stage(&layout, &CategorySet::default(), &mut rec);

        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 2);
        assert_eq!(rec.failures().len(), 2);
        assert!(layout.extracted.join("c_good.zip").is_file());
        // 失败目录中可读的部分仍被复制
        assert!(layout.extracted.join("a_docs/ok.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_tree_aggregates_failures() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        write(&src.join("a.txt"), "a");
        write(&src.join("sub/b.txt"), "b");
        symlink(dir.path().join("missing"), src.join("sub/broken")).unwrap();

        let result = copy_tree(&src, &dir.path().join("dst"));

        match result {
            Err(ZipsortError::CopyFailed { failed, path, .. }) => {
                assert_eq!(failed, 1);
                assert_eq!(path, src.display().to_string());
            }
            other => panic!("expected CopyFailed, got {:?}", other),
        }
        assert!(dir.path().join("dst/a.txt").is_file());
        assert!(dir.path().join("dst/sub/b.txt").is_file());
    }
}
