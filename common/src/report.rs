//! マッピングレポート生成
//!
//! 単位名ごとに詳細ファイルをまとめ、固定書式のテキストレポートと
//! JSON版の要約を作る。ファイル書き込みは呼び出し側で行う。

use crate::inventory::Inventory;
use crate::types::{DetailFile, OverallFile};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const BANNER_WIDTH: usize = 60;
const NOT_FOUND: &str = "未找到";

/// 単位名ごとの詳細ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitGroup<'a> {
    pub unit_name: &'a str,
    pub files: Vec<&'a DetailFile>,
}

/// 単位名でグループ化
///
/// 単位名の昇順（序数比較）。グループ内は一覧順を保つ。
pub fn group_by_unit(detail_files: &[DetailFile]) -> Vec<UnitGroup<'_>> {
    let mut unit_map: BTreeMap<&str, Vec<&DetailFile>> = BTreeMap::new();
    for file in detail_files {
        unit_map.entry(file.unit_name.as_str()).or_default().push(file);
    }

    unit_map
        .into_iter()
        .map(|(unit_name, files)| UnitGroup { unit_name, files })
        .collect()
}

/// テキストレポートを生成
pub fn render_mapping_report(inventory: &Inventory) -> String {
    MappingReport(inventory).to_string()
}

/// 固定書式のテキストレポート
struct MappingReport<'a>(&'a Inventory);

impl fmt::Display for MappingReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inventory = self.0;
        let groups = group_by_unit(&inventory.detail_files);
        let heavy = "=".repeat(BANNER_WIDTH);
        let light = "-".repeat(BANNER_WIDTH);
        let overall = inventory
            .overall_file
            .as_ref()
            .map(|file| file.filename.as_str())
            .unwrap_or(NOT_FOUND);

        writeln!(f, "{}", heavy)?;
        writeln!(f, "单位名称与详情文件映射关系报告")?;
        writeln!(f, "{}\n", heavy)?;

        writeln!(f, "总体得分表: {}\n", overall)?;
        writeln!(f, "详情文件数量: {}", inventory.detail_files.len())?;
        writeln!(f, "单位数量: {}\n", groups.len())?;

        writeln!(f, "{}", light)?;
        writeln!(f, "详细映射关系:")?;
        writeln!(f, "{}\n", light)?;

        for group in &groups {
            writeln!(f, "\n【{}】", group.unit_name)?;
            for (idx, file) in group.files.iter().enumerate() {
                writeln!(f, "  [{}] {}", idx + 1, file.filename)?;
                writeln!(f, "      网站: {}", file.website)?;
                writeln!(f, "      状态: {}", file.status)?;
                writeln!(f, "      标识: {}", file.code)?;
            }
        }

        Ok(())
    }
}

/// JSON版マッピングレポート
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSummary<'a> {
    pub detail_files: &'a [DetailFile],
    pub overall_file: Option<&'a OverallFile>,
    pub timestamp: String,
    /// 走査した `.xlsx` ファイル数（分類できなかったものを含む）
    pub total_files: usize,
}

impl<'a> MappingSummary<'a> {
    pub fn new(inventory: &'a Inventory, timestamp: String, total_files: usize) -> Self {
        Self {
            detail_files: &inventory.detail_files,
            overall_file: inventory.overall_file.as_ref(),
            timestamp,
            total_files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Inventory {
        Inventory::from_filenames([
            "总体得分表_X.xlsx",
            "B单位__b.com__FAIL__222.xlsx",
            "A单位__a.com__OK__111.xlsx",
            "bad.xlsx",
        ])
    }

    #[test]
    fn test_group_by_unit_sorted() {
        let inventory = Inventory::from_filenames([
            "乙__b1__OK__1.xlsx",
            "甲__a1__OK__2.xlsx",
            "乙__b2__OK__3.xlsx",
        ]);
        let groups = group_by_unit(&inventory.detail_files);
        assert_eq!(groups.len(), 2);
        // 序数比較: 乙(U+4E59) < 甲(U+7532)
        assert_eq!(groups[0].unit_name, "乙");
        assert_eq!(groups[0].files.len(), 2);
        assert_eq!(groups[0].files[0].website, "b1");
        assert_eq!(groups[0].files[1].website, "b2");
        assert_eq!(groups[1].unit_name, "甲");
    }

    #[test]
    fn test_render_report_scenario() {
        let report = render_mapping_report(&scenario());
        let expected = "\
============================================================
单位名称与详情文件映射关系报告
============================================================

总体得分表: 总体得分表_X.xlsx

详情文件数量: 2
单位数量: 2

------------------------------------------------------------
详细映射关系:
------------------------------------------------------------


【A单位】
  [1] A单位__a.com__OK__111.xlsx
      网站: a.com
      状态: OK
      标识: 111

【B单位】
  [1] B单位__b.com__FAIL__222.xlsx
      网站: b.com
      状态: FAIL
      标识: 222
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_report_empty() {
        let report = render_mapping_report(&Inventory::new());
        let expected = "\
============================================================
单位名称与详情文件映射关系报告
============================================================

总体得分表: 未找到

详情文件数量: 0
单位数量: 0

------------------------------------------------------------
详细映射关系:
------------------------------------------------------------

";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_report_numbering_per_unit() {
        let inventory = Inventory::from_filenames([
            "U__s1__OK__1.xlsx",
            "U__s2__OK__2.xlsx",
            "V__s3__OK__3.xlsx",
        ]);
        let report = render_mapping_report(&inventory);
        assert!(report.contains("  [1] U__s1__OK__1.xlsx"));
        assert!(report.contains("  [2] U__s2__OK__2.xlsx"));
        assert!(report.contains("  [1] V__s3__OK__3.xlsx"));
    }

    #[test]
    fn test_mapping_summary_json() {
        let inventory = scenario();
        let summary = MappingSummary::new(&inventory, "2026-02-16 11:44:02".into(), 4);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["totalFiles"], 4);
        assert_eq!(value["timestamp"], "2026-02-16 11:44:02");
        assert_eq!(value["overallFile"]["filename"], "总体得分表_X.xlsx");
        assert_eq!(value["overallFile"]["type"], "overall");
        assert_eq!(value["detailFiles"].as_array().unwrap().len(), 2);
    }
}
