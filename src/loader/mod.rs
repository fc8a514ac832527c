//! スプレッドシート読み込み
//!
//! 1行目をヘッダーとし、以降の各行を列名→値のレコードに変換する。
//! ブックのハンドルは関数内に閉じ、エラー時も含めて必ず解放される。

pub mod cell;

use crate::error::{Result, ScoreSheetError};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use score_sheet_common::{Record, SheetSummary, WorkbookRecords};
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};
use std::path::Path;

pub use cell::cell_to_value;

/// ヘッダー行から列名を作る
///
/// 空セルは `Unnamed: {n}`、重複名は `名前.1`, `名前.2` ... とする。
pub fn column_names(header_row: &[Data]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header_row.len());

    for (idx, cell) in header_row.iter().enumerate() {
        let base = cell::header_name(cell, idx);
        let mut name = base.clone();

        if used.contains(&name) {
            let suffix = next_suffix.entry(base.clone()).or_insert(1);
            loop {
                name = format!("{}.{}", base, suffix);
                *suffix += 1;
                if !used.contains(&name) {
                    break;
                }
            }
        }

        used.insert(name.clone());
        names.push(name);
    }

    names
}

/// セル範囲をレコード列に変換
///
/// 範囲の先頭行がヘッダー。空の範囲は空のレコード列。
pub fn range_to_records(range: &Range<Data>) -> Vec<Record> {
    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header_row) => column_names(header_row),
        None => return Vec::new(),
    };

    rows.map(|row| {
        columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let value = row.get(idx).map(cell_to_value).unwrap_or(serde_json::Value::Null);
                (column.clone(), value)
            })
            .collect()
    })
    .collect()
}

fn open_xlsx(path: &Path) -> Result<Xlsx<std::io::BufReader<std::fs::File>>> {
    if !path.exists() {
        return Err(ScoreSheetError::FileNotFound(path.display().to_string()));
    }
    Ok(open_workbook(path)?)
}

fn sheet_records<RS: Read + Seek>(workbook: &mut Xlsx<RS>, sheet_name: &str) -> Result<Vec<Record>> {
    let range = workbook.worksheet_range(sheet_name)?;
    let records = range_to_records(&range);
    log_sheet(sheet_name, &records);
    Ok(records)
}

fn log_sheet(sheet_name: &str, records: &[Record]) {
    let summary = SheetSummary::from_records(sheet_name, records);
    tracing::info!(
        "シート '{}' 列名: {:?} / 行数: {}",
        summary.name,
        summary.columns,
        summary.row_count
    );
    for (idx, record) in summary.sample.iter().enumerate() {
        tracing::debug!("  [{}] {}", idx, serde_json::Value::Object(record.clone()));
    }
}

/// 1シートを読み込む（シート名省略時は先頭シート）
pub fn load_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Vec<Record>> {
    let mut workbook = open_xlsx(path)?;
    let names = workbook.sheet_names();

    let target = match sheet_name {
        Some(name) if names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => return Err(ScoreSheetError::SheetNotFound(name.to_string())),
        None => names
            .first()
            .cloned()
            .ok_or_else(|| ScoreSheetError::SheetNotFound(path.display().to_string()))?,
    };

    sheet_records(&mut workbook, &target)
}

/// 全シートを読み込む（シート順はブックの順）
pub fn load_workbook(path: &Path) -> Result<WorkbookRecords> {
    let mut workbook = open_xlsx(path)?;
    let names = workbook.sheet_names();
    tracing::info!("シート一覧: {:?}", names);

    let mut sheets = WorkbookRecords::new();
    for name in names {
        let records = sheet_records(&mut workbook, &name)?;
        sheets.insert(name, records);
    }

    Ok(sheets)
}

/// 総合得点表を読み込む
///
/// 失敗はログに出して `None` を返す。
pub fn parse_overall_score_file(path: &Path) -> Option<Vec<Record>> {
    match load_sheet(path, None) {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::error!("総合得点表の解析に失敗: {}: {}", path.display(), e);
            None
        }
    }
}

/// 詳細ファイルの全シートを読み込む
///
/// 失敗はログに出して `None` を返す。
pub fn parse_detail_file(path: &Path) -> Option<WorkbookRecords> {
    match load_workbook(path) {
        Ok(sheets) => Some(sheets),
        Err(e) => {
            tracing::error!("詳細ファイルの解析に失敗: {}: {}", path.display(), e);
            None
        }
    }
}
