//! Score Sheet Common Library
//!
//! ファイル名の分類・インベントリ構築・レポート生成など、
//! ファイルシステムに触れない共通ロジック

pub mod types;
pub mod error;
pub mod filename;
pub mod inventory;
pub mod report;
pub mod mapper;

pub use types::{
    DetailFile, FileDescriptor, OverallFile, Record, SheetRecords, SheetSummary, WorkbookRecords,
};
pub use error::{Error, Result, to_pretty_json};
pub use filename::{parse_filename, parse_detail_filename, is_overall_filename, OVERALL_MARKER, XLSX_EXTENSION};
pub use inventory::Inventory;
pub use report::{group_by_unit, render_mapping_report, MappingSummary, UnitGroup};
pub use mapper::UnitMapping;
