use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("不正な検索パターン: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    /// 設定・データセット読み込みのエラー（共通ライブラリ側）
    #[error(transparent)]
    Common(#[from] term_lookup_common::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
