//! ファイル名パーサー
//!
//! 詳細ファイル名の形式: `{単位名}__{サイト}__{状態}__{識別コード}.xlsx`
//! 総合得点表は固定ラベル「总体得分表」を含むファイル名で識別する。

use crate::types::{DetailFile, FileDescriptor, OverallFile};

/// 総合得点表を示すラベル
pub const OVERALL_MARKER: &str = "总体得分表";

/// 対象拡張子（大文字小文字を区別）
pub const XLSX_EXTENSION: &str = ".xlsx";

/// 詳細ファイル名の区切り文字
pub const DELIMITER: &str = "__";

/// 詳細ファイル名に必要な最小セグメント数
const MIN_DETAIL_SEGMENTS: usize = 4;

/// ファイル名を分類する
///
/// 総合得点表の判定を先に行うため、ラベルを含むファイル名は
/// 区切り形式を満たしていても `Overall` になる。
/// セグメントが4未満のファイル名は `None`（ログなしで除外）。
///
/// # Examples
/// ```
/// use score_sheet_common::{parse_filename, FileDescriptor};
///
/// let parsed = parse_filename("A単位__a.com__OK__111.xlsx");
/// match parsed {
///     Some(FileDescriptor::Detail(d)) => assert_eq!(d.unit_name, "A単位"),
///     _ => panic!("detail expected"),
/// }
/// assert!(parse_filename("bad.xlsx").is_none());
/// ```
pub fn parse_filename(filename: &str) -> Option<FileDescriptor> {
    if is_overall_filename(filename) {
        return Some(FileDescriptor::Overall(OverallFile {
            filename: filename.to_string(),
        }));
    }

    parse_detail_filename(filename).map(FileDescriptor::Detail)
}

/// 総合得点表のファイル名か
pub fn is_overall_filename(filename: &str) -> bool {
    filename.contains(OVERALL_MARKER)
}

/// 詳細ファイル名をパース（総合得点表の判定は行わない）
///
/// 5番目以降のセグメントは無視する。
/// `.xlsx` は末尾に限らずすべて取り除いてから分割する。
pub fn parse_detail_filename(filename: &str) -> Option<DetailFile> {
    let stem = filename.replace(XLSX_EXTENSION, "");
    let parts: Vec<&str> = stem.split(DELIMITER).collect();

    if parts.len() < MIN_DETAIL_SEGMENTS {
        return None;
    }

    Some(DetailFile {
        filename: filename.to_string(),
        unit_name: parts[0].to_string(),
        website: parts[1].to_string(),
        status: parts[2].to_string(),
        code: parts[3].to_string(),
    })
}

/// 対象拡張子を持つファイル名か
pub fn has_xlsx_extension(filename: &str) -> bool {
    filename.ends_with(XLSX_EXTENSION)
}
