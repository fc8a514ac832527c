//! 単位名→詳細ファイルのマッピング
//!
//! 総合得点表の単位名から対応する詳細ファイルを引く。
//! 完全一致がなければ部分一致（どちらかがもう一方を含む）で探す。

use crate::inventory::Inventory;
use crate::types::{DetailFile, OverallFile};
use std::collections::BTreeMap;

/// 単位名マッピング
#[derive(Debug, Clone, Default)]
pub struct UnitMapping {
    /// 単位名 → 詳細ファイル（1単位に複数サイトあり得る）
    file_map: BTreeMap<String, Vec<DetailFile>>,
    overall_file: Option<OverallFile>,
}

impl UnitMapping {
    pub fn from_inventory(inventory: &Inventory) -> Self {
        let mut file_map: BTreeMap<String, Vec<DetailFile>> = BTreeMap::new();
        for file in &inventory.detail_files {
            file_map
                .entry(file.unit_name.clone())
                .or_default()
                .push(file.clone());
        }

        Self {
            file_map,
            overall_file: inventory.overall_file.clone(),
        }
    }

    /// 単位名で詳細ファイルを取得
    ///
    /// 1. 完全一致
    /// 2. 部分一致（単位名順で最初のもの）
    ///
    /// 空文字は何にも一致しない。
    pub fn files_by_unit_name(&self, unit_name: &str) -> Option<&[DetailFile]> {
        if unit_name.is_empty() {
            return None;
        }

        if let Some(files) = self.file_map.get(unit_name) {
            return Some(files.as_slice());
        }

        self.file_map
            .iter()
            .find(|(key, _)| key.contains(unit_name) || unit_name.contains(key.as_str()))
            .map(|(_, files)| files.as_slice())
    }

    /// 単位名とサイトで1ファイルを取得
    ///
    /// サイトが一致しなければその単位の先頭ファイルを返す。
    pub fn file_by_unit_and_website(&self, unit_name: &str, website: &str) -> Option<&DetailFile> {
        let files = self.files_by_unit_name(unit_name)?;
        files
            .iter()
            .find(|f| f.website == website)
            .or_else(|| files.first())
    }

    pub fn overall_file(&self) -> Option<&OverallFile> {
        self.overall_file.as_ref()
    }

    /// 単位名一覧（昇順）
    pub fn unit_names(&self) -> Vec<&str> {
        self.file_map.keys().map(|k| k.as_str()).collect()
    }

    pub fn has_detail_file(&self, unit_name: &str) -> bool {
        self.files_by_unit_name(unit_name).is_some()
    }

    pub fn unit_count(&self) -> usize {
        self.file_map.len()
    }
}
