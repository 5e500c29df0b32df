//! # 数据模型模块
//!
//! 定义文件分类规则、目录布局以及流水线事件的数据模型。
//!
//! ## 依赖关系
//! - 被 `pipeline/` 和 `commands/` 使用
//! - 子模块: category, layout, event

pub mod category;
pub mod event;
pub mod layout;

pub use category::{is_archive, Category, CategorySet};
pub use event::{Event, EventRecord, Phase};
pub use layout::Layout;
