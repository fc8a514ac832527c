use crate::error::{Result, ScoreSheetError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 既定のデータディレクトリ（カレントからの相対パス）
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 入出力ファイルを置くディレクトリ
    pub data_dir: PathBuf,
    /// 変換対象の総合得点表（未指定ならスキャン結果から選ぶ）
    pub overall_file: Option<String>,
    /// 変換対象の詳細ファイル（未指定ならスキャン結果の先頭）
    pub detail_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            overall_file: None,
            detail_file: None,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み。なければ既定値
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScoreSheetError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("score-sheet").join("config.json"))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = dir;
        self.save()
    }

    /// CLI引数で上書き
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        overall_file: Option<String>,
        detail_file: Option<String>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if overall_file.is_some() {
            self.overall_file = overall_file;
        }
        if detail_file.is_some() {
            self.detail_file = detail_file;
        }
        self
    }
}
