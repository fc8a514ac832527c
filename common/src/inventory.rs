//! ファイル一覧（インベントリ）
//!
//! ディレクトリ走査結果から総合得点表1件と詳細ファイル列を組み立てる。

use crate::filename::{has_xlsx_extension, parse_filename};
use crate::types::{DetailFile, FileDescriptor, OverallFile};
use serde::{Deserialize, Serialize};

/// 走査結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    /// 詳細ファイル（一覧順）
    pub detail_files: Vec<DetailFile>,
    /// 総合得点表（複数あれば最後のもの）
    pub overall_file: Option<OverallFile>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイル名の列から組み立てる
    ///
    /// `.xlsx` 以外は無視する。呼び出し側は通常ファイルのみを渡すこと。
    pub fn from_filenames<I, S>(filenames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inventory = Self::new();
        for name in filenames {
            let name = name.as_ref();
            if has_xlsx_extension(name) {
                inventory.add(name);
            }
        }
        inventory
    }

    /// 1ファイルを分類して追加
    ///
    /// 分類できないファイル名（区切りが足りない）は何もせず `false` を返す。
    pub fn add(&mut self, filename: &str) -> bool {
        match parse_filename(filename) {
            Some(FileDescriptor::Overall(file)) => {
                self.overall_file = Some(file);
                true
            }
            Some(FileDescriptor::Detail(file)) => {
                self.detail_files.push(file);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.overall_file.is_none() && self.detail_files.is_empty()
    }

    /// フロントエンド用のファイル名一覧
    ///
    /// 総合得点表を先頭に、詳細ファイルは一覧順のまま並べる。
    pub fn file_list(&self) -> Vec<String> {
        self.overall_file
            .iter()
            .map(|f| f.filename.clone())
            .chain(self.detail_files.iter().map(|f| f.filename.clone()))
            .collect()
    }
}
