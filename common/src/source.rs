//! データセット行リーダー
//!
//! CSV/スプレッドシートを分割済みの行（`RawRow`）に変換する。
//! 列数の検証は `TermIndex` 側で行うため、ここでは可変長を許容する。

use crate::error::{Error, Result};
use calamine::{open_workbook_auto, Reader};
use std::io::Read;
use std::path::Path;

/// スプレッドシートとして扱う拡張子
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// 分割済みの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 元ファイルの行番号（1始まり、ヘッダー行を含む）
    pub line: usize,
    pub fields: Vec<String>,
}

/// データセットの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Csv,
    Spreadsheet,
}

impl DatasetKind {
    /// 拡張子から判別（不明な拡張子はCSV扱い）
    pub fn from_path(path: &Path) -> Self {
        let is_spreadsheet = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| SPREADSHEET_EXTENSIONS.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);

        if is_spreadsheet {
            DatasetKind::Spreadsheet
        } else {
            DatasetKind::Csv
        }
    }
}

/// ファイルから分割済みの行を読み込む
pub fn load_rows(path: &Path, has_header: bool) -> Result<Vec<RawRow>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    match DatasetKind::from_path(path) {
        DatasetKind::Csv => {
            let file = std::fs::File::open(path)?;
            read_csv_rows(file, has_header)
        }
        DatasetKind::Spreadsheet => read_spreadsheet_rows(path, has_header),
    }
}

/// CSVを読み込んで行のリストを返す
pub fn read_csv_rows<R: Read>(reader: R, has_header: bool) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(rows.len() + 1);

        // 空行はスキップ
        if record.iter().all(|field| field.is_empty()) {
            tracing::debug!(line, "skipping blank row");
            continue;
        }

        rows.push(RawRow {
            line,
            fields: record.iter().map(|field| field.to_string()).collect(),
        });
    }

    Ok(rows)
}

/// 先頭シートを読み込む（数値セルは `42.0` → `42` のように文字列化）
pub fn read_spreadsheet_rows(path: &Path, has_header: bool) -> Result<Vec<RawRow>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| Error::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Spreadsheet(format!("no worksheet in {}", path.display())))?
        .map_err(|e| Error::Spreadsheet(e.to_string()))?;

    // 範囲の先頭がシートの1行目とは限らない
    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);
    let skip = usize::from(has_header);

    let rows = range
        .rows()
        .enumerate()
        .skip(skip)
        .filter_map(|(i, cells)| {
            let fields: Vec<String> = cells
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();
            if fields.iter().all(|f| f.is_empty()) {
                tracing::debug!(line = first_line + i, "skipping blank row");
                return None;
            }
            Some(RawRow {
                line: first_line + i,
                fields,
            })
        })
        .collect();

    Ok(rows)
}
