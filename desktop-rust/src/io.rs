use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use term_lookup_common::{Config, TermIndex, SPREADSHEET_EXTENSIONS};

const DATASET_EXTENSIONS: &[&str] = &["csv", "xlsx", "xlsm", "xls", "ods"];
const CSV_EXTENSIONS: &[&str] = &["csv"];

/// ファイルダイアログのフィルタ（名前, 拡張子）
pub fn dataset_filters() -> [(&'static str, &'static [&'static str]); 3] {
    [
        ("Dataset", DATASET_EXTENSIONS),
        ("CSV", CSV_EXTENSIONS),
        ("Spreadsheet", SPREADSHEET_EXTENSIONS),
    ]
}

/// 起動時に開くデータセット（引数 > 環境変数 > 設定ファイル）
pub fn startup_dataset(arg: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    config.resolve_data_path(arg.as_deref()).ok()
}

pub fn load_term_index(path: &Path, has_header: bool) -> Result<TermIndex> {
    let index = TermIndex::from_path(path, has_header)
        .with_context(|| format!("load {}", path.display()))?;
    tracing::info!(path = %path.display(), terms = index.len(), "dataset loaded");
    Ok(index)
}
