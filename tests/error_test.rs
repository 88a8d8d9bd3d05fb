//! エラーケーステスト
//!
//! データセット読み込み時のエラーハンドリングを検証

use std::path::Path;
use tempfile::tempdir;
use term_lookup::dataset;
use term_lookup::error::AppError;

/// 存在しないデータセット
#[test]
fn test_load_nonexistent_dataset() {
    let result = dataset::load_index(Path::new("/nonexistent/path/input.csv"), true);
    assert!(matches!(
        result.unwrap_err(),
        AppError::Common(term_lookup_common::Error::FileNotFound(_))
    ));
}

/// 列数が足りない行は起動を止める
#[test]
fn test_short_row_fails_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.csv");
    std::fs::write(
        &path,
        "term,m1,m2,m3,m4,m5,m6,m7,m8,m9,m10,good\n\
         Kidney,a,b,c,d,e,f,g,h,i,j,yes\n\
         Liver,a,b,c\n",
    )
    .unwrap();

    let err = dataset::load_index(&path, true).unwrap_err();
    match err {
        AppError::Common(term_lookup_common::Error::DataFormat { line, reason }) => {
            // ヘッダーを含めたファイル上の行番号
            assert_eq!(line, 3);
            assert!(reason.contains("12"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// ヘッダーのみのデータセットは空のインデックスとして扱わない
#[test]
fn test_header_only_dataset_fails_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("input.csv");
    std::fs::write(&path, "term,m1,m2,m3,m4,m5,m6,m7,m8,m9,m10,good\n").unwrap();

    let err = dataset::load_index(&path, true).unwrap_err();
    assert!(matches!(
        err,
        AppError::Common(term_lookup_common::Error::DataFormat { .. })
    ));
}

/// AppErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AppError::Prompt("端末なし".to_string()),
        AppError::Common(term_lookup_common::Error::Config("テスト設定エラー".to_string())),
        AppError::Common(term_lookup_common::Error::FileNotFound("input.csv".to_string())),
        AppError::Common(term_lookup_common::Error::Spreadsheet("壊れたファイル".to_string())),
        AppError::Common(term_lookup_common::Error::MissingDataPath),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingDataPathエラーのメッセージ確認
#[test]
fn test_missing_data_path_message() {
    let display = format!(
        "{}",
        AppError::from(term_lookup_common::Error::MissingDataPath)
    );
    assert!(display.contains("--data"));
    assert!(display.contains("TERM_LOOKUP_DATA"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AppError = io_err.into();

    assert!(matches!(err, AppError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = term_lookup_common::Error::data_format(4, "expected 10 candidates, found 3");
    let err: AppError = common_err.into();

    assert!(matches!(err, AppError::Common(_)));
    assert_eq!(
        format!("{}", err),
        "Data format error (line 4): expected 10 candidates, found 3"
    );
}
