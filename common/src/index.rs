//! 用語インデックスモジュール
//!
//! 事前計算済みの照合データセットを読み込み、ソース用語から
//! 照合レコードを引けるようにする。構築後は読み取り専用。

use crate::error::{Error, Result};
use crate::source::{load_rows, read_csv_rows, RawRow};
use crate::types::MatchRecord;
use std::collections::HashMap;
use std::path::Path;

/// 重複したソース用語（先勝ちで後続は破棄）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTerm {
    pub term: String,
    /// 破棄された行の行番号
    pub line: usize,
    /// 採用された行の行番号
    pub kept_line: usize,
}

/// ソース用語 → 照合レコードのインデックス
///
/// 空のインデックスは作れない（`load` が `DataFormat` を返す）。
#[derive(Debug, Clone)]
pub struct TermIndex {
    /// データセット順のレコード
    records: Vec<MatchRecord>,
    /// ソース用語 → records の位置
    by_term: HashMap<String, usize>,
    duplicates: Vec<DuplicateTerm>,
}

impl TermIndex {
    /// 分割済みの行からインデックスを構築（行番号は1からの連番）
    ///
    /// 列順は `[ソース用語, 候補1..候補10, 品質ラベル]`。
    /// 構造が不正な行は `DataFormat` エラー、重複用語は警告のみで先勝ち。
    pub fn load<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        Self::load_raw_rows(
            rows.into_iter()
                .enumerate()
                .map(|(i, fields)| RawRow { line: i + 1, fields }),
        )
    }

    /// 元ファイルの行番号付きの行からインデックスを構築
    pub fn load_raw_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut records = Vec::new();
        let mut lines_by_term: HashMap<String, usize> = HashMap::new();
        let mut by_term = HashMap::new();
        let mut duplicates = Vec::new();
        let mut last_line = 0;

        for RawRow { line, fields } in rows {
            last_line = line;
            let record = MatchRecord::from_fields(line, &fields)?;

            if let Some(&kept_line) = lines_by_term.get(record.source_term()) {
                tracing::warn!(
                    term = record.source_term(),
                    line,
                    kept_line,
                    "duplicate source term, keeping first occurrence"
                );
                duplicates.push(DuplicateTerm {
                    term: record.source_term().to_string(),
                    line,
                    kept_line,
                });
                continue;
            }

            lines_by_term.insert(record.source_term().to_string(), line);
            by_term.insert(record.source_term().to_string(), records.len());
            records.push(record);
        }

        if records.is_empty() {
            return Err(Error::data_format(last_line, "dataset contains no rows"));
        }

        tracing::debug!(
            terms = records.len(),
            duplicates = duplicates.len(),
            "term index built"
        );

        Ok(Self {
            records,
            by_term,
            duplicates,
        })
    }

    /// CSV文字列から読み込み
    pub fn from_csv_str(content: &str, has_header: bool) -> Result<Self> {
        let rows = read_csv_rows(content.as_bytes(), has_header)?;
        Self::load_raw_rows(rows)
    }

    /// ファイルから読み込み（拡張子でCSV/スプレッドシートを判別）
    pub fn from_path(path: &Path, has_header: bool) -> Result<Self> {
        let rows = load_rows(path, has_header)?;
        Self::load_raw_rows(rows)
    }

    /// 全ソース用語（データセット順）
    pub fn list_terms(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.source_term()).collect()
    }

    /// 完全一致で検索（未知の用語は `None`）
    pub fn lookup(&self, term: &str) -> Option<&MatchRecord> {
        self.by_term.get(term).map(|&i| &self.records[i])
    }

    /// 部分一致（大文字小文字を無視）で絞り込み、データセット順を保つ
    pub fn filter_terms(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list_terms();
        }
        self.records
            .iter()
            .map(|r| r.source_term())
            .filter(|term| term.to_lowercase().contains(&query))
            .collect()
    }

    /// 全レコード（データセット順）
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    /// 読み込み時に破棄した重複用語
    pub fn duplicates(&self) -> &[DuplicateTerm] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
