//! 出力ファイル書き込み
//!
//! JSONはUTF-8・2スペースインデント・非ASCII文字はエスケープしない。
//! 既存ファイルは毎回上書きする。

pub mod report;

use crate::error::Result;
use score_sheet_common::{to_pretty_json, Record, WorkbookRecords};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const OVERALL_DATA_FILE: &str = "overall_data.json";
pub const DETAIL_DATA_FILE: &str = "detail_data.json";
pub const FILE_LIST_FILE: &str = "file_list.json";
pub const MAPPING_REPORT_TXT: &str = "mapping_report.txt";
pub const MAPPING_REPORT_JSON: &str = "mapping_report.json";

/// JSONファイルを書き込む
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value)?;
    write_text(path, &json)
}

/// テキストファイルを書き込む
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// 総合得点表のレコードを `overall_data.json` に保存
pub fn write_overall_data(data_dir: &Path, records: &[Record]) -> Result<std::path::PathBuf> {
    let path = data_dir.join(OVERALL_DATA_FILE);
    write_json(&path, records)?;
    Ok(path)
}

/// 詳細ファイルのシート別レコードを `detail_data.json` に保存
pub fn write_detail_data(data_dir: &Path, sheets: &WorkbookRecords) -> Result<std::path::PathBuf> {
    let path = data_dir.join(DETAIL_DATA_FILE);
    write_json(&path, sheets)?;
    Ok(path)
}
