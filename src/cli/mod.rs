//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `run`: 完整流水线（暂存 → 解压 → 分类）
//! - `unpack`: 仅在原地解压嵌套压缩包
//! - `sort`: 仅按分类复制文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run, unpack, sort

pub mod run;
pub mod sort;
pub mod unpack;

use crate::models::{Category, CategorySet};

use clap::{Args, Parser, Subcommand};

/// zipsort - 嵌套压缩包解压与文件分类工具
#[derive(Parser)]
#[command(name = "zipsort")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Recursively unpack nested zip archives and sort documents by extension", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Stage a folder, unpack every nested archive and sort the documents
    Run(run::RunArgs),

    /// Unpack every (nested) zip archive under a directory in place
    Unpack(unpack::UnpackArgs),

    /// Copy recognized files under a directory into flat category folders
    Sort(sort::SortArgs),
}

/// 分类参数（run 与 sort 共用）
#[derive(Args, Debug, Default)]
pub struct CategoryArgs {
    /// Sort category as SUFFIX=FOLDER or GLOB=FOLDER, repeatable.
    /// Replaces the defaults (csv=All_CSVs, pdf=All_PDFs)
    #[arg(short, long = "category", value_name = "SUFFIX=FOLDER")]
    pub categories: Vec<Category>,
}

impl CategoryArgs {
    pub fn to_set(&self) -> CategorySet {
        CategorySet::new(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["zipsort", "run", "/tmp/batch"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.folder.to_str(), Some("/tmp/batch"));
                assert!(!args.keep_archives);
                assert!(args.report.is_none());
                assert_eq!(args.categories.to_set().len(), 2);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_categories() {
        let cli = Cli::try_parse_from([
            "zipsort",
            "sort",
            "work",
            "--output",
            "out",
            "-c",
            "txt=Texts",
            "--category",
            "*.md=Notes",
        ])
        .unwrap();
        match cli.command {
            Commands::Sort(args) => {
                let set = args.categories.to_set();
                assert_eq!(set.len(), 2);
                assert_eq!(set.classify("readme.md").unwrap().folder, "Notes");
            }
            _ => panic!("expected sort"),
        }
    }

    #[test]
    fn test_reject_bad_category() {
        let result = Cli::try_parse_from(["zipsort", "run", "x", "--category", "nofolder"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unpack_keeps_archives_by_default() {
        let cli = Cli::try_parse_from(["zipsort", "unpack", "downloads"]).unwrap();
        match cli.command {
            Commands::Unpack(args) => assert!(!args.remove_archives),
            _ => panic!("expected unpack"),
        }

        let cli =
            Cli::try_parse_from(["zipsort", "unpack", "downloads", "--remove-archives"]).unwrap();
        match cli.command {
            Commands::Unpack(args) => assert!(args.remove_archives),
            _ => panic!("expected unpack"),
        }
    }

    #[test]
    fn test_folder_is_required() {
        assert!(Cli::try_parse_from(["zipsort", "run"]).is_err());
    }
}
