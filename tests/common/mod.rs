//! テスト用xlsx生成ヘルパー

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// テスト用セル値
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Bool(bool),
    Blank,
}

/// シート定義（名前と行）
pub struct SheetDef {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
}

/// xlsxファイルを作成
pub fn write_workbook(path: &Path, sheets: &[SheetDef]) {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).expect("シート名設定失敗");

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (r, c) = (row_idx as u32, col_idx as u16);
                match cell {
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, *s).expect("文字列書き込み失敗");
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n).expect("数値書き込み失敗");
                    }
                    Cell::Bool(b) => {
                        worksheet.write_boolean(r, c, *b).expect("真偽値書き込み失敗");
                    }
                    Cell::Blank => {}
                }
            }
        }
    }

    workbook.save(path).expect("xlsx保存失敗");
}

/// 総合得点表（1シート）
pub fn write_overall_fixture(path: &Path) {
    write_workbook(
        path,
        &[SheetDef {
            name: "总体得分",
            rows: vec![
                vec![Cell::Text("序号"), Cell::Text("单位名称"), Cell::Text("得分"), Cell::Text("备注")],
                vec![Cell::Number(1.0), Cell::Text("A单位"), Cell::Number(95.0), Cell::Blank],
                vec![Cell::Number(2.0), Cell::Text("B单位"), Cell::Number(87.5), Cell::Text("复查")],
            ],
        }],
    );
}

/// 詳細ファイル（2シート）
pub fn write_detail_fixture(path: &Path) {
    write_workbook(
        path,
        &[
            SheetDef {
                name: "首页",
                rows: vec![
                    vec![Cell::Text("检测项"), Cell::Text("结果"), Cell::Text("通过")],
                    vec![Cell::Text("IPv6解析"), Cell::Text("支持"), Cell::Bool(true)],
                ],
            },
            SheetDef {
                name: "二级页面",
                rows: vec![
                    vec![Cell::Text("链接"), Cell::Text("状态码")],
                    vec![Cell::Text("https://a.com/1"), Cell::Number(200.0)],
                    vec![Cell::Text("https://a.com/2"), Cell::Number(404.0)],
                ],
            },
        ],
    );
}
