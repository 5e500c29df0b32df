//! # 文件分类规则
//!
//! 定义 "文件名模式 → 目标文件夹" 的映射，以及压缩包识别。
//!
//! ## 匹配规则
//! - 模式为 glob（`*.csv`），大小写不敏感
//! - 多个分类同时匹配时，先声明者优先
//! - 默认分类: `*.csv → All_CSVs`, `*.pdf → All_PDFs`
//!
//! ## 依赖关系
//! - 被 `pipeline/stager.rs`, `pipeline/sorter.rs` 使用
//! - 使用 `glob` crate 进行模式匹配

use crate::error::{Result, ZipsortError};

use glob::{MatchOptions, Pattern};
use std::path::Path;
use std::str::FromStr;

/// 可识别的压缩包扩展名
pub const ARCHIVE_EXTENSION: &str = "zip";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 判断路径是否为压缩包（按扩展名）
pub fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
        .unwrap_or(false)
}

/// 单个文件分类
#[derive(Debug, Clone)]
pub struct Category {
    /// 分类名（用于日志，如 "CSV"）
    pub name: String,
    /// 文件名匹配模式
    pub pattern: Pattern,
    /// 目标文件夹名（相对于输出根目录）
    pub folder: String,
}

impl Category {
    /// 创建新的分类
    pub fn new(name: &str, pattern: &str, folder: &str) -> Result<Self> {
        let pattern = Pattern::new(pattern).map_err(|e| {
            ZipsortError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
        })?;
        if folder.trim().is_empty() || folder.contains(['/', '\\']) || folder == ".." {
            return Err(ZipsortError::InvalidArgument(format!(
                "Invalid category folder '{}'",
                folder
            )));
        }
        Ok(Self {
            name: name.to_string(),
            pattern,
            folder: folder.to_string(),
        })
    }

    /// 检查文件名是否属于该分类
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, MATCH_OPTIONS)
    }
}

/// 解析 `SUFFIX=FOLDER` 或 `GLOB=FOLDER`
impl FromStr for Category {
    type Err = ZipsortError;

    fn from_str(s: &str) -> Result<Self> {
        let (lhs, folder) = s.split_once('=').ok_or_else(|| {
            ZipsortError::InvalidArgument(format!(
                "Category '{}' must look like 'csv=All_CSVs'",
                s
            ))
        })?;
        let lhs = lhs.trim();
        let folder = folder.trim();

        if lhs.is_empty() {
            return Err(ZipsortError::InvalidArgument(format!(
                "Category '{}' has an empty suffix",
                s
            )));
        }

        if lhs.contains(['*', '?', '[']) {
            let name = lhs.trim_start_matches("*.").to_uppercase();
            Category::new(&name, lhs, folder)
        } else {
            let suffix = lhs.trim_start_matches('.');
            Category::new(&suffix.to_uppercase(), &format!("*.{}", suffix), folder)
        }
    }
}

/// 有序的分类集合
#[derive(Debug, Clone)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// 由分类列表创建；为空时使用默认分类
    pub fn new(categories: Vec<Category>) -> Self {
        if categories.is_empty() {
            return Self::default();
        }
        Self { categories }
    }

    /// 查找文件名所属的第一个分类
    pub fn classify(&self, file_name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches(file_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        let categories = [("CSV", "*.csv", "All_CSVs"), ("PDF", "*.pdf", "All_PDFs")]
            .iter()
            .filter_map(|(name, pattern, folder)| Category::new(name, pattern, folder).ok())
            .collect();
        Self { categories }
    }
}
