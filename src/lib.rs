//! score-sheet: スプレッドシートのJSON変換・ファイル一覧生成

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod scanner;
