use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "score-sheet")]
#[command(about = "スプレッドシートのJSON変換・ファイル一覧生成ツール", long_about = None)]
pub struct Cli {
    /// 省略時は run（走査→変換の一括処理）
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// データディレクトリ（デフォルト: 設定ファイルの値、なければ data）
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 走査と変換を一括実行
    Run,

    /// データディレクトリを走査してファイル一覧・マッピングレポートを生成
    Scan,

    /// 総合得点表・詳細ファイルをJSONに変換
    Convert {
        /// 総合得点表のファイル名（省略時は走査結果から選択）
        #[arg(long)]
        overall: Option<String>,

        /// 詳細ファイルのファイル名（省略時は走査結果の先頭）
        #[arg(long)]
        detail: Option<String>,
    },

    /// ブックの全シート概要を表示
    Inspect {
        /// ファイル名またはパス
        #[arg(required = true)]
        file: PathBuf,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 単位名から詳細ファイルを検索（部分一致あり）
    Lookup {
        /// 単位名
        #[arg(required = true)]
        unit: String,

        /// サイト
        #[arg(short, long)]
        website: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// データディレクトリを設定
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_default_run() {
        let cli = Cli::try_parse_from(["score-sheet"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_convert_args() {
        let cli = Cli::try_parse_from([
            "score-sheet",
            "--data-dir",
            "other",
            "convert",
            "--detail",
            "A__a__OK__1.xlsx",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("other")));
        match cli.command {
            Some(Commands::Convert { overall, detail }) => {
                assert!(overall.is_none());
                assert_eq!(detail.as_deref(), Some("A__a__OK__1.xlsx"));
            }
            _ => panic!("convert expected"),
        }
    }

    #[test]
    fn test_lookup_args() {
        let cli = Cli::try_parse_from(["score-sheet", "lookup", "成都市农林科学院", "-w", "www.cdnky.com", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Lookup { .. })));
    }
}
