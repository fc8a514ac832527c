use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreSheetError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(#[from] calamine::XlsxError),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("詳細ファイルが見つかりません: {unit} (登録単位: {})", .known_units.join(", "))]
    UnitNotFound { unit: String, known_units: Vec<String> },

    #[error(transparent)]
    Common(#[from] score_sheet_common::Error),
}

pub type Result<T> = std::result::Result<T, ScoreSheetError>;
