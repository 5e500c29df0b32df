//! # 处理流水线
//!
//! 依次执行 暂存 → 解压 → 分类，所有输出经由 `Reporter`，与终端展示解耦。
//!
//! ## 状态机
//! ```text
//! Idle → Staging → Unpacking → Sorting → Done
//! ```
//! 单个条目的错误不会中断流水线；只要源目录有效，总会到达 `Done`。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 子模块: stager, unpacker, sorter, tasks, listing, outcome, report

pub mod listing;
pub mod outcome;
pub mod report;
pub mod sorter;
pub mod stager;
pub mod tasks;
pub mod unpacker;

pub use outcome::{Outcome, PhaseStats};
pub use report::Reporter;
#[cfg(test)]
pub use report::Recorder;
pub use unpacker::UnpackOptions;

use crate::error::{Result, ZipsortError};
use crate::models::{CategorySet, Layout, Phase};

use std::fs;

/// 完整的处理流水线
pub struct Pipeline {
    layout: Layout,
    categories: CategorySet,
    options: UnpackOptions,
}

impl Pipeline {
    pub fn new(layout: Layout, categories: CategorySet, options: UnpackOptions) -> Self {
        Self {
            layout,
            categories,
            options,
        }
    }

    /// 运行流水线
    ///
    /// 仅当源目录无效或输出目录无法创建时返回错误，此时不会产生任何日志。
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<Outcome> {
        let source = &self.layout.source;
        if !source.is_dir() {
            return Err(ZipsortError::DirectoryNotFound {
                path: source.display().to_string(),
            });
        }

        fs::create_dir_all(&self.layout.merged)
            .map_err(|e| ZipsortError::write(&self.layout.merged, e))?;

        let mut outcome = Outcome::default();

        reporter.phase(Phase::Staging);
        outcome.staging = stager::stage(&self.layout, &self.categories, reporter);

        // 进度上限 = 已暂存条目 + 工作目录中的压缩包与可分类文件
        let count = tasks::count_tasks(&self.layout.extracted, &self.categories);
        outcome.estimated_tasks = outcome.staging.succeeded as u64 + count.total();
        reporter.set_total(outcome.estimated_tasks);

        reporter.phase(Phase::Unpacking);
        outcome.unpacking = unpacker::unpack(&self.layout.extracted, self.options, reporter);

        reporter.phase(Phase::Sorting);
        outcome.sorting = sorter::sort(
            &self.layout.extracted,
            &self.layout.merged,
            &self.categories,
            reporter,
        );

        reporter.phase(Phase::Done);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::FailureKind;
    use crate::models::Event;
    use std::io::{Cursor, Write};
    use std::path::Path;
    use tempfile::TempDir;

    fn zip_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, content) in files {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn run_on(root: &Path) -> (Outcome, Recorder) {
        let pipeline = Pipeline::new(
            Layout::new(root),
            CategorySet::default(),
            UnpackOptions {
                remove_archives: true,
            },
        );
        let mut rec = Recorder::new();
        let outcome = pipeline.run(&mut rec).unwrap();
        (outcome, rec)
    }

    #[test]
    fn test_nested_scenario() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let b = zip_bytes(&[("report.pdf", b"%PDF-1.4"), ("data.csv", b"x,y\n1,2")]);
        let a = zip_bytes(&[("b.zip", b.as_slice())]);
        fs::write(root.join("a.zip"), a).unwrap();
        fs::write(root.join("notes.csv"), "n\n1").unwrap();

        let (outcome, rec) = run_on(root);

        assert!(outcome.is_clean());
        assert!(root.join("Extracted/a/b/report.pdf").is_file());
        assert!(root.join("Extracted/a/b/data.csv").is_file());
        assert!(root.join("Merged/All_PDFs/report.pdf").is_file());
        assert!(root.join("Merged/All_CSVs/data.csv").is_file());
        assert!(root.join("Merged/All_CSVs/notes.csv").is_file());
        assert_eq!(outcome.unpacking.succeeded, 2);
        assert_eq!(outcome.sorting.succeeded, 3);
        // 2 个暂存条目 + a.zip + notes.csv；嵌套内容在估计时不可见
        assert_eq!(rec.total, Some(4));
        assert_eq!(rec.progress, 7);
        assert_eq!(
            rec.phases,
            vec![Phase::Staging, Phase::Unpacking, Phase::Sorting, Phase::Done]
        );
        // 只删除工作目录中的副本，源目录中的压缩包保持不变
        assert!(!root.join("Extracted/a.zip").exists());
        assert!(root.join("a.zip").is_file());
    }

    #[test]
    fn test_broken_archive_scenario() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("broken.zip"), "garbage bytes").unwrap();

        let (outcome, rec) = run_on(root);

        let failures = rec.failures();
        assert_eq!(failures.len(), 1);
        assert!(matches!(
            failures[0],
            Event::Failed {
                kind: FailureKind::BadArchive,
                phase: Phase::Unpacking,
                ..
            }
        ));
        assert_eq!(outcome.total_failed(), 1);
        assert_eq!(rec.phases.last(), Some(&Phase::Done));

        let broken = root.join("Extracted/broken");
        let has_contents = broken.is_dir()
            && fs::read_dir(&broken).map(|mut d| d.next().is_some()).unwrap_or(false);
        assert!(!has_contents);
    }

    #[test]
    fn test_empty_source_scenario() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        let (outcome, rec) = run_on(root);

        assert!(rec.events.is_empty());
        assert_eq!(outcome.estimated_tasks, 0);
        assert_eq!(rec.total, Some(0));
        assert_eq!(rec.phases.last(), Some(&Phase::Done));
        assert!(root.join("Extracted").is_dir());
        assert!(root.join("Merged/All_CSVs").is_dir());
        assert!(root.join("Merged/All_PDFs").is_dir());
        assert_eq!(fs::read_dir(root.join("Extracted")).unwrap().count(), 0);
        assert_eq!(fs::read_dir(root.join("Merged")).unwrap().count(), 2);
    }

    #[test]
    fn test_plain_files_only() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/a.txt"), "a").unwrap();
        fs::write(root.join("docs/b.pdf"), "b").unwrap();

        let (outcome, rec) = run_on(root);

        assert_eq!(outcome.staging.succeeded, 1);
        assert_eq!(rec.extractions(), 0);
        assert!(root.join("Extracted/docs/a.txt").is_file());
        assert!(root.join("Merged/All_PDFs/b.pdf").is_file());
        assert!(!root.join("Merged/All_CSVs/a.txt").exists());
    }

    #[test]
    fn test_rerun_is_stable() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("a.zip"), zip_bytes(&[("x.csv", b"1")])).unwrap();

        run_on(root);
        let (outcome, _) = run_on(root);

        // 第二次暂存会重新复制源中的 a.zip，解压并合并到已有目录
        assert!(outcome.is_clean());
        assert_eq!(outcome.unpacking.succeeded, 1);
        assert!(root.join("Merged/All_CSVs/x.csv").is_file());
        assert!(!root.join("Extracted/Extracted").exists());
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let dir = TempDir::new().unwrap();
        let pipeline = Pipeline::new(
            Layout::new(&dir.path().join("missing")),
            CategorySet::default(),
            UnpackOptions::default(),
        );
        let mut rec = Recorder::new();

        let result = pipeline.run(&mut rec);
        assert!(matches!(result, Err(ZipsortError::DirectoryNotFound { .. })));
        assert!(rec.events.is_empty());
        assert!(rec.phases.is_empty());
    }
}
