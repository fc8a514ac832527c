//! 処理パイプライン
//!
//! - scan: データディレクトリ走査 → file_list.json / mapping_report.{txt,json}
//! - convert: 総合得点表・詳細ファイル → overall_data.json / detail_data.json
//!
//! 入力ファイルの欠落や解析失敗はログに出してその手順だけをスキップする。

use crate::config::Config;
use crate::error::{Result, ScoreSheetError};
use crate::export::{self, report};
use crate::loader;
use crate::scanner::{self, ScanResult};
use score_sheet_common::{DetailFile, Inventory, SheetSummary, UnitMapping};
use std::path::{Path, PathBuf};

/// 変換結果（書き込んだファイル）
#[derive(Debug, Clone, Default)]
pub struct ConvertOutcome {
    pub overall_output: Option<PathBuf>,
    pub detail_output: Option<PathBuf>,
}

/// データディレクトリを走査し、ファイル一覧とレポートを保存
///
/// ディレクトリがなければ空の結果を返し、何も書き込まない。
/// 各出力の書き込み失敗はログに出し、残りの出力は続けて書く。
pub fn run_scan(data_dir: &Path) -> Result<ScanResult> {
    let scan = scanner::scan_data_files(data_dir);

    if !data_dir.is_dir() {
        tracing::warn!("出力先がないため保存をスキップ: {}", data_dir.display());
        return Ok(scan);
    }

    match report::write_file_list(data_dir, &scan.inventory) {
        Ok(file_list) => tracing::info!(
            "ファイル一覧を保存: {} ({}件)",
            data_dir.join(export::FILE_LIST_FILE).display(),
            file_list.len()
        ),
        Err(e) => tracing::error!("ファイル一覧の保存に失敗: {}", e),
    }

    match report::write_mapping_report(data_dir, &scan.inventory) {
        Ok(path) => tracing::info!("マッピングレポートを保存: {}", path.display()),
        Err(e) => tracing::error!("マッピングレポートの保存に失敗: {}", e),
    }

    match report::write_mapping_summary(data_dir, &scan.inventory, scan.total_files) {
        Ok(path) => tracing::debug!("マッピングJSONを保存: {}", path.display()),
        Err(e) => tracing::error!("マッピングJSONの保存に失敗: {}", e),
    }

    Ok(scan)
}

/// 変換対象のファイル名を決める
///
/// 設定・引数での指定を優先し、なければ走査結果から選ぶ
/// （総合得点表はインベントリのもの、詳細ファイルは一覧の先頭）。
pub fn resolve_inputs(config: &Config, inventory: &Inventory) -> (Option<String>, Option<String>) {
    let overall = config
        .overall_file
        .clone()
        .or_else(|| inventory.overall_file.as_ref().map(|f| f.filename.clone()));
    let detail = config
        .detail_file
        .clone()
        .or_else(|| inventory.detail_files.first().map(|f| f.filename.clone()));
    (overall, detail)
}

/// 総合得点表と詳細ファイルをJSONに変換
///
/// 総合得点表の保存に失敗しても詳細ファイルの変換は行う。
pub fn run_convert(config: &Config) -> Result<ConvertOutcome> {
    let data_dir = config.data_dir.as_path();

    let inventory = if config.overall_file.is_some() && config.detail_file.is_some() {
        Inventory::new()
    } else {
        scanner::scan_data_files(data_dir).inventory
    };
    let (overall, detail) = resolve_inputs(config, &inventory);

    let mut outcome = ConvertOutcome::default();

    match overall {
        Some(name) => match convert_overall(data_dir, &name) {
            Ok(output) => outcome.overall_output = output,
            Err(e) => tracing::error!("総合得点表データの保存に失敗: {}", e),
        },
        None => tracing::warn!("総合得点表が見つかりません。変換をスキップします"),
    }

    match detail {
        Some(name) => match convert_detail(data_dir, &name) {
            Ok(output) => outcome.detail_output = output,
            Err(e) => tracing::error!("詳細ファイルデータの保存に失敗: {}", e),
        },
        None => tracing::warn!("詳細ファイルが見つかりません。変換をスキップします"),
    }

    Ok(outcome)
}

/// 総合得点表（先頭シート）を `overall_data.json` に変換
pub fn convert_overall(data_dir: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    let path = data_dir.join(file_name);
    if !path.is_file() {
        tracing::warn!("総合得点表が存在しません: {}", path.display());
        return Ok(None);
    }

    tracing::info!("総合得点表を解析: {}", file_name);
    let records = match loader::parse_overall_score_file(&path) {
        Some(records) if !records.is_empty() => records,
        Some(_) => {
            tracing::warn!("総合得点表にデータ行がないため保存しません: {}", file_name);
            return Ok(None);
        }
        None => return Ok(None),
    };

    let output = export::write_overall_data(data_dir, &records)?;
    tracing::info!("総合得点表データを保存: {} ({}行)", output.display(), records.len());
    Ok(Some(output))
}

/// 詳細ファイル（全シート）を `detail_data.json` に変換
pub fn convert_detail(data_dir: &Path, file_name: &str) -> Result<Option<PathBuf>> {
    let path = data_dir.join(file_name);
    if !path.is_file() {
        tracing::warn!("詳細ファイルが存在しません: {}", path.display());
        return Ok(None);
    }

    tracing::info!("詳細ファイルを解析: {}", file_name);
    let sheets = match loader::parse_detail_file(&path) {
        Some(sheets) if !sheets.is_empty() => sheets,
        Some(_) => {
            tracing::warn!("詳細ファイルにシートがないため保存しません: {}", file_name);
            return Ok(None);
        }
        None => return Ok(None),
    };

    let output = export::write_detail_data(data_dir, &sheets)?;
    tracing::info!("詳細ファイルデータを保存: {} ({}シート)", output.display(), sheets.len());
    Ok(Some(output))
}

/// ブックの全シート概要
///
/// `file` が既存パスならそのまま、そうでなければデータディレクトリ内の名前とみなす。
pub fn run_inspect(data_dir: &Path, file: &Path) -> Result<Vec<SheetSummary>> {
    let path = if file.is_file() {
        file.to_path_buf()
    } else {
        data_dir.join(file)
    };
    let sheets = loader::load_workbook(&path)?;
    Ok(sheets.summaries())
}

/// 単位名から詳細ファイルを引く
///
/// サイト指定時はそのサイトのファイル（なければ単位の先頭ファイル）1件。
/// 一致する単位がなければ登録済みの単位名を添えてエラーにする。
pub fn run_lookup(data_dir: &Path, unit_name: &str, website: Option<&str>) -> Result<Vec<DetailFile>> {
    let scan = scanner::scan_data_files(data_dir);
    let mapping = UnitMapping::from_inventory(&scan.inventory);
    tracing::debug!(
        "単位数: {} / 総合得点表: {}",
        mapping.unit_count(),
        mapping.overall_file().map(|f| f.filename.as_str()).unwrap_or("なし")
    );

    if !mapping.has_detail_file(unit_name) {
        return Err(ScoreSheetError::UnitNotFound {
            unit: unit_name.to_string(),
            known_units: mapping.unit_names().into_iter().map(String::from).collect(),
        });
    }

    let files: Vec<DetailFile> = match website {
        Some(site) => mapping
            .file_by_unit_and_website(unit_name, site)
            .into_iter()
            .cloned()
            .collect(),
        None => mapping
            .files_by_unit_name(unit_name)
            .map(|files| files.to_vec())
            .unwrap_or_default(),
    };
    Ok(files)
}
