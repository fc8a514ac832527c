//! ファイル一覧・マッピングレポートの保存

use super::{write_json, write_text, FILE_LIST_FILE, MAPPING_REPORT_JSON, MAPPING_REPORT_TXT};
use crate::error::Result;
use score_sheet_common::{render_mapping_report, Inventory, MappingSummary};
use std::path::{Path, PathBuf};

/// `file_list.json` を保存（総合得点表→詳細ファイルの順）
pub fn write_file_list(data_dir: &Path, inventory: &Inventory) -> Result<Vec<String>> {
    let file_list = inventory.file_list();
    write_json(&data_dir.join(FILE_LIST_FILE), &file_list)?;
    Ok(file_list)
}

/// `mapping_report.txt` を保存
pub fn write_mapping_report(data_dir: &Path, inventory: &Inventory) -> Result<PathBuf> {
    let path = data_dir.join(MAPPING_REPORT_TXT);
    write_text(&path, &render_mapping_report(inventory))?;
    Ok(path)
}

/// `mapping_report.json` を保存
pub fn write_mapping_summary(
    data_dir: &Path,
    inventory: &Inventory,
    total_files: usize,
) -> Result<PathBuf> {
    let path = data_dir.join(MAPPING_REPORT_JSON);
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let summary = MappingSummary::new(inventory, timestamp, total_files);
    write_json(&path, &summary)?;
    Ok(path)
}
