//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 「用語が見つからない」「品質ラベルが不明」はエラーではない。
/// それぞれ `None` と `MatchQuality::Unknown` で表現する。
#[derive(Error, Debug)]
pub enum Error {
    /// データセットの構造エラー（起動時に致命的）
    ///
    /// `line` は元ファイルの行番号（1始まり、ヘッダー行を含む）
    #[error("Data format error (line {line}): {reason}")]
    DataFormat { line: usize, reason: String },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No dataset configured. Pass `--data PATH`, set TERM_LOOKUP_DATA, or run `term-lookup config --set-data PATH`")]
    MissingDataPath,
}

impl Error {
    pub fn data_format(line: usize, reason: impl Into<String>) -> Self {
        Error::DataFormat {
            line,
            reason: reason.into(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_data_format() {
        let error = Error::data_format(3, "expected at least 12 fields, found 5");
        let display = format!("{}", error);
        assert_eq!(
            display,
            "Data format error (line 3): expected at least 12 fields, found 5"
        );
    }

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_missing_data_path_message() {
        let display = format!("{}", Error::MissingDataPath);
        assert!(display.contains("--data"));
        assert!(display.contains("TERM_LOOKUP_DATA"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::data_format(1, "テスト");
        let debug = format!("{:?}", error);
        assert!(debug.contains("DataFormat"));
        assert!(debug.contains("テスト"));
    }
}
