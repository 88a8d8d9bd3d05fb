//! データセット読み込みモジュール
//!
//! 形式の判別と行の分割は共通ライブラリに任せ、読み込み結果をログに残す。

use crate::error::Result;
use std::path::Path;
use term_lookup_common::TermIndex;

/// データセットを読み込んでインデックスを構築
pub fn load_index(path: &Path, has_header: bool) -> Result<TermIndex> {
    let index = TermIndex::from_path(path, has_header)?;

    tracing::info!(
        path = %path.display(),
        terms = index.len(),
        duplicates = index.duplicates().len(),
        "dataset loaded"
    );

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;
    use term_lookup_common::{DuplicateTerm, MatchQuality, CANDIDATE_COUNT};

    /// 1行分のセルを書き込む（候補1は数値セル）
    fn write_record(
        sheet: &mut rust_xlsxwriter::Worksheet,
        row: u32,
        term: &str,
        best: f64,
        label: &str,
    ) {
        sheet.write_string(row, 0, term).unwrap();
        sheet.write_number(row, 1, best).unwrap();
        for col in 2..=CANDIDATE_COUNT as u16 {
            sheet.write_string(row, col, format!("{}-c{}", term, col)).unwrap();
        }
        sheet
            .write_string(row, CANDIDATE_COUNT as u16 + 1, label)
            .unwrap();
    }

    #[test]
    fn test_load_index_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(
            &path,
            "term,m1,m2,m3,m4,m5,m6,m7,m8,m9,m10,good\n\
             Kidney,Nephron,c2,c3,c4,c5,c6,c7,c8,c9,c10,yes\n",
        )
        .unwrap();

        let index = load_index(&path, true).unwrap();
        assert_eq!(index.list_terms(), vec!["Kidney"]);
    }

    #[test]
    fn test_load_index_missing_file() {
        let err = load_index(Path::new("/nonexistent/input.csv"), true).unwrap_err();
        assert!(matches!(
            err,
            AppError::Common(term_lookup_common::Error::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_index_propagates_data_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "h1,h2\nKidney,yes\n").unwrap();

        let err = load_index(&path, true).unwrap_err();
        assert!(matches!(
            err,
            AppError::Common(term_lookup_common::Error::DataFormat { line: 2, .. })
        ));
    }

    #[test]
    fn test_load_index_xlsx() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let header = [
            "HuBMAP term", "match1", "match2", "match3", "match4", "match5", "match6",
            "match7", "match8", "match9", "match10", "good match",
        ];
        for (col, name) in header.iter().enumerate() {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        write_record(sheet, 1, "Kidney", 42.0, "yes");
        // 3行目は空行
        write_record(sheet, 3, "Liver", 7.5, "no");
        write_record(sheet, 4, "Kidney", 1.0, "no");
        workbook.save(&path).unwrap();

        let index = load_index(&path, true).unwrap();
        assert_eq!(index.list_terms(), vec!["Kidney", "Liver"]);

        let kidney = index.lookup("Kidney").unwrap();
        assert_eq!(kidney.best_match(), "42");
        assert_eq!(kidney.candidates()[1], "Kidney-c2");
        assert_eq!(kidney.quality(), MatchQuality::Good);

        let liver = index.lookup("Liver").unwrap();
        assert_eq!(liver.best_match(), "7.5");
        assert_eq!(liver.quality(), MatchQuality::None);

        assert_eq!(
            index.duplicates(),
            &[DuplicateTerm {
                term: "Kidney".into(),
                line: 5,
                kept_line: 2,
            }]
        );
    }

    #[test]
    fn test_load_index_xlsx_without_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        write_record(sheet, 0, "Spleen", 3.0, "yes");
        workbook.save(&path).unwrap();

        let index = load_index(&path, false).unwrap();
        assert_eq!(index.list_terms(), vec!["Spleen"]);
        assert_eq!(index.lookup("Spleen").unwrap().best_match(), "3");
    }
}
