//! # 事件报告导出
//!
//! 将一次运行的所有事件写出为 CSV（`phase,status,kind,path,detail`）。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `csv` + `serde` 序列化 `EventRecord`

use crate::error::{Result, ZipsortError};
use crate::models::EventRecord;

use std::path::Path;

/// 写出事件报告
pub fn write_csv(records: &[EventRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()
        .map_err(|e| ZipsortError::write(output_path, e))?;

    Ok(())
}
