use clap::Parser;
use score_sheet_rust::{cli, config, error, logging, pipeline};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("設定の読み込みに失敗、既定値を使用: {}", e);
            Config::default()
        }
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = config.with_overrides(cli.data_dir, None, None);
            println!("📊 score-sheet - 一括処理\n");

            // 各手順の失敗はログに出して次へ進む
            println!("[1/2] データファイルを走査中...");
            scan_step(&config.data_dir);

            println!("[2/2] JSONに変換中...");
            convert_step(&config);

            println!("\n✅ 完了");
        }

        Commands::Scan => {
            let config = config.with_overrides(cli.data_dir, None, None);
            println!("📂 score-sheet - 走査\n");
            scan_step(&config.data_dir);
            println!("\n✅ 走査完了");
        }

        Commands::Convert { overall, detail } => {
            let config = config.with_overrides(cli.data_dir, overall, detail);
            println!("🔄 score-sheet - JSON変換\n");
            convert_step(&config);
            println!("\n✅ 変換完了");
        }

        Commands::Inspect { file, json } => {
            let config = config.with_overrides(cli.data_dir, None, None);
            let summaries = pipeline::run_inspect(&config.data_dir, &file)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                println!("シート数: {}", summaries.len());
                for summary in &summaries {
                    println!("\nシート '{}'", summary.name);
                    println!("  列名: {}", summary.columns.join(", "));
                    println!("  行数: {}", summary.row_count);
                    for (idx, record) in summary.sample.iter().enumerate() {
                        println!("  [{}] {}", idx, serde_json::to_string(record)?);
                    }
                }
            }
        }

        Commands::Lookup { unit, website } => {
            let config = config.with_overrides(cli.data_dir, None, None);
            let files = pipeline::run_lookup(&config.data_dir, &unit, website.as_deref())?;

            for (idx, file) in files.iter().enumerate() {
                println!("[{}] {}", idx + 1, file.filename);
                println!("    単位: {}", file.unit_name);
                println!("    サイト: {}", file.website);
                println!("    状態: {}", file.status);
                println!("    識別: {}", file.code);
            }
        }

        Commands::Config { set_data_dir, show } => {
            let mut config = config;

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ データディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  データディレクトリ: {}", config.data_dir.display());
                println!("  総合得点表: {}", config.overall_file.as_deref().unwrap_or("(自動)"));
                println!("  詳細ファイル: {}", config.detail_file.as_deref().unwrap_or("(自動)"));
            }
        }
    }

    Ok(())
}

fn scan_step(data_dir: &Path) {
    match pipeline::run_scan(data_dir) {
        Ok(scan) => {
            println!("✔ 詳細ファイル {}件を検出", scan.inventory.detail_files.len());
            if let Some(overall) = &scan.inventory.overall_file {
                println!("✔ 総合得点表: {}", overall.filename);
            }
        }
        Err(e) => tracing::error!("走査結果の保存に失敗: {}", e),
    }
}

fn convert_step(config: &Config) {
    match pipeline::run_convert(config) {
        Ok(outcome) => {
            for path in outcome.overall_output.iter().chain(outcome.detail_output.iter()) {
                println!("✔ 保存: {}", path.display());
            }
        }
        Err(e) => tracing::error!("変換結果の保存に失敗: {}", e),
    }
}
