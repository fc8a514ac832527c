//! 共通型定義
//!
//! CLIと将来のフロントエンド連携で共有される型:
//! - Record: スプレッドシート1行分（列名→値）
//! - DetailFile / OverallFile: ファイル名から得たファイル記述子
//! - WorkbookRecords: シート名→レコード列
//! - SheetSummary: シート内容の概要

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// スプレッドシート1行分のレコード
///
/// キー順は元シートの列順を保持する（serde_jsonの`preserve_order`）。
pub type Record = serde_json::Map<String, serde_json::Value>;

/// 詳細ファイル: `{単位名}__{サイト}__{状態}__{識別コード}.xlsx`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "detail", rename_all = "camelCase")]
pub struct DetailFile {
    pub filename: String,
    pub unit_name: String,
    pub website: String,
    pub status: String,
    pub code: String,
}

/// 総合得点表ファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "overall")]
pub struct OverallFile {
    pub filename: String,
}

/// ファイル名の分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDescriptor {
    Overall(OverallFile),
    Detail(DetailFile),
}

impl FileDescriptor {
    pub fn filename(&self) -> &str {
        match self {
            FileDescriptor::Overall(f) => &f.filename,
            FileDescriptor::Detail(f) => &f.filename,
        }
    }
}

/// 1シート分のレコード
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRecords {
    pub name: String,
    pub records: Vec<Record>,
}

/// ブック全体のレコード（シート順を保持）
///
/// JSONでは `{"シート名": [レコード, ...], ...}` として出力する。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookRecords {
    sheets: Vec<SheetRecords>,
}

impl WorkbookRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// シートを追加。同名シートは上書き（位置は最初の出現を維持）
    pub fn insert(&mut self, name: impl Into<String>, records: Vec<Record>) {
        let name = name.into();
        match self.sheets.iter_mut().find(|s| s.name == name) {
            Some(sheet) => sheet.records = records,
            None => self.sheets.push(SheetRecords { name, records }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Record]> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.records.as_slice())
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheets(&self) -> &[SheetRecords] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Serialize for WorkbookRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sheets.len()))?;
        for sheet in &self.sheets {
            map.serialize_entry(&sheet.name, &sheet.records)?;
        }
        map.end()
    }
}

/// シート概要（列名・行数・先頭数行）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSummary {
    pub name: String,
    pub row_count: usize,
    pub columns: Vec<String>,
    pub sample: Vec<Record>,
}

/// 概要に含める先頭行数
pub const SAMPLE_ROWS: usize = 3;

impl SheetSummary {
    /// レコード列から概要を作成
    ///
    /// 列名は宣言順（先頭レコードのキー順）。レコードがなければ空。
    pub fn from_records(name: &str, records: &[Record]) -> Self {
        let columns = records
            .first()
            .map(|r| r.keys().cloned().collect())
            .unwrap_or_default();

        Self {
            name: name.to_string(),
            row_count: records.len(),
            columns,
            sample: records.iter().take(SAMPLE_ROWS).cloned().collect(),
        }
    }
}

impl WorkbookRecords {
    /// 全シートの概要
    pub fn summaries(&self) -> Vec<SheetSummary> {
        self.sheets
            .iter()
            .map(|s| SheetSummary::from_records(&s.name, &s.records))
            .collect()
    }
}
