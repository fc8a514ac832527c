//! データディレクトリ走査
//!
//! 直下の `.xlsx` 通常ファイルを列挙し、ファイル名からインベントリを作る。

use crate::error::{Result, ScoreSheetError};
use score_sheet_common::filename::has_xlsx_extension;
use score_sheet_common::Inventory;
use std::path::Path;
use walkdir::WalkDir;

/// 走査結果
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub inventory: Inventory,
    /// 見つかった `.xlsx` ファイル数（分類できなかったものを含む）
    pub total_files: usize,
}

/// ディレクトリ直下の `.xlsx` ファイル名を一覧順で返す
///
/// 一覧順はファイル名順（ファイルシステムに依存しないように並べ替える）。
pub fn list_spreadsheets(folder: &Path) -> Result<Vec<String>> {
    if !folder.is_dir() {
        return Err(ScoreSheetError::FolderNotFound(folder.display().to_string()));
    }

    let mut names = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // シンボリックリンクは辿った先で判定（ディレクトリへのリンクは除外）
        if !path.is_file() {
            continue;
        }

        // 非UTF-8の名前は後で元のパスに戻せないため除外
        let Some(file_name) = entry.file_name().to_str() else {
            tracing::warn!("UTF-8でないファイル名をスキップ: {}", path.display());
            continue;
        };
        if has_xlsx_extension(file_name) {
            names.push(file_name.to_string());
        }
    }

    Ok(names)
}

/// データディレクトリを走査してインベントリを作る
///
/// ディレクトリがなければエラーログを出して空のインベントリを返す。
pub fn scan_data_files(folder: &Path) -> ScanResult {
    let names = match list_spreadsheets(folder) {
        Ok(names) => names,
        Err(e) => {
            tracing::error!("{}", e);
            return ScanResult::default();
        }
    };

    // 区切りが足りないファイル名はログなしで除外
    let inventory = Inventory::from_filenames(&names);

    if let Some(file) = &inventory.overall_file {
        tracing::info!("総合得点表を検出: {}", file.filename);
    }
    for file in &inventory.detail_files {
        tracing::debug!(
            "詳細ファイル: {} (単位: {}, サイト: {}, 状態: {}, 識別: {})",
            file.filename,
            file.unit_name,
            file.website,
            file.status,
            file.code
        );
    }

    ScanResult {
        inventory,
        total_files: names.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_list_folder_not_found() {
        let result = list_spreadsheets(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(ScoreSheetError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_missing_folder_is_empty() {
        let result = scan_data_files(Path::new("/nonexistent/folder"));
        assert!(result.inventory.is_empty());
        assert_eq!(result.total_files, 0);
    }

    #[test]
    fn test_list_filters_extension_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("c__s__OK__3.xlsx")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("a__s__OK__1.xlsx")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("b.XLSX")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();
        File::create(dir.path().join("overall_data.json")).unwrap();

        let names = list_spreadsheets(dir.path()).unwrap();
        assert_eq!(names, vec!["a__s__OK__1.xlsx", "c__s__OK__3.xlsx"]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("x__y__z__w.xlsx")).unwrap();
        File::create(dir.path().join("a__s__OK__1.xlsx")).unwrap();

        let result = scan_data_files(dir.path());
        assert_eq!(result.total_files, 1);
        assert_eq!(result.inventory.detail_files.len(), 1);
    }

    #[test]
    fn test_subfolders_not_scanned() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("old")).unwrap();
        File::create(dir.path().join("old").join("a__s__OK__1.xlsx")).unwrap();

        let result = scan_data_files(dir.path());
        assert!(result.inventory.is_empty());
    }

    #[test]
    fn test_total_files_counts_unclassified() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("bad.xlsx")).unwrap();
        File::create(dir.path().join("总体得分表_1.xlsx")).unwrap();

        let result = scan_data_files(dir.path());
        assert_eq!(result.total_files, 2);
        assert!(result.inventory.overall_file.is_some());
        assert!(result.inventory.detail_files.is_empty());
    }

    #[test]
    fn test_scan_matches_inventory_from_filenames() {
        let dir = tempdir().unwrap();
        for name in ["总体得分表_1.xlsx", "B__b__OK__2.xlsx", "A__a__OK__1.xlsx", "总体得分表_2.xlsx", "bad.xlsx"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let result = scan_data_files(dir.path());
        let names = list_spreadsheets(dir.path()).unwrap();
        assert_eq!(result.inventory, Inventory::from_filenames(&names));
        // 一覧順で最後の総合得点表
        assert_eq!(
            result.inventory.overall_file.as_ref().map(|f| f.filename.as_str()),
            Some("总体得分表_2.xlsx")
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        File::create(dir.path().join(OsStr::from_bytes(b"\xff\xfe__s__OK__1.xlsx"))).unwrap();
        File::create(dir.path().join("a__s__OK__1.xlsx")).unwrap();

        let names = list_spreadsheets(dir.path()).unwrap();
        assert_eq!(names, vec!["a__s__OK__1.xlsx"]);

        let result = scan_data_files(dir.path());
        assert_eq!(result.total_files, 1);
        assert_eq!(result.inventory.detail_files.len(), 1);
    }
}
