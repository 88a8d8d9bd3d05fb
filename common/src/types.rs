//! 照合データの型定義
//!
//! CLIとデスクトップで共有される型:
//! - MatchQuality: 照合品質（yes/no/その他 を正規化）
//! - MatchRecord: 1つのソース用語に対する照合結果（候補10件）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 候補用語の件数（順位1〜10）
pub const CANDIDATE_COUNT: usize = 10;

/// 1行あたりの必須フィールド数（ソース用語 + 候補10件 + 品質ラベル）
pub const FIELD_COUNT: usize = CANDIDATE_COUNT + 2;

/// 照合品質
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    /// 良好な一致 ("yes")
    Good,
    /// 一致なし ("no")
    None,
    /// 不明（上記以外・空欄）
    Unknown,
}

impl MatchQuality {
    /// 生ラベルから正規化（失敗しない）
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "yes" => MatchQuality::Good,
            "no" => MatchQuality::None,
            _ => MatchQuality::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchQuality::Good => "good",
            MatchQuality::None => "none",
            MatchQuality::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 照合レコード（ソース用語ごとに1件）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    source_term: String,
    candidates: Vec<String>,
    quality: MatchQuality,
    raw_quality: String,
}

impl MatchRecord {
    /// 候補がちょうど10件でなければ `DataFormat` エラー
    pub fn new(
        line: usize,
        source_term: impl Into<String>,
        candidates: Vec<String>,
        raw_quality: impl Into<String>,
    ) -> Result<Self> {
        if candidates.len() != CANDIDATE_COUNT {
            return Err(Error::data_format(
                line,
                format!(
                    "expected {} candidates, found {}",
                    CANDIDATE_COUNT,
                    candidates.len()
                ),
            ));
        }

        let raw_quality = raw_quality.into();
        Ok(Self {
            source_term: source_term.into(),
            candidates,
            quality: MatchQuality::from_label(&raw_quality),
            raw_quality,
        })
    }

    /// 位置ベースの行から構築（13列目以降は無視）
    pub fn from_fields(line: usize, fields: &[String]) -> Result<Self> {
        if fields.len() < FIELD_COUNT {
            return Err(Error::data_format(
                line,
                format!(
                    "expected at least {} fields, found {}",
                    FIELD_COUNT,
                    fields.len()
                ),
            ));
        }

        Self::new(
            line,
            fields[0].as_str(),
            fields[1..=CANDIDATE_COUNT].to_vec(),
            fields[FIELD_COUNT - 1].as_str(),
        )
    }

    pub fn source_term(&self) -> &str {
        &self.source_term
    }

    /// 最良一致（順位1の候補）
    pub fn best_match(&self) -> &str {
        &self.candidates[0]
    }

    /// 順位順の候補
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn quality(&self) -> MatchQuality {
        self.quality
    }

    /// 読み込んだままの品質ラベル
    pub fn raw_quality(&self) -> &str {
        &self.raw_quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(source: &str, label: &str) -> Vec<String> {
        let mut v = vec![source.to_string()];
        v.extend((1..=CANDIDATE_COUNT).map(|i| format!("c{}", i)));
        v.push(label.to_string());
        v
    }

    #[test]
    fn test_quality_from_label() {
        assert_eq!(MatchQuality::from_label("yes"), MatchQuality::Good);
        assert_eq!(MatchQuality::from_label("no"), MatchQuality::None);
        assert_eq!(MatchQuality::from_label(" yes "), MatchQuality::Good);
        assert_eq!(MatchQuality::from_label("maybe"), MatchQuality::Unknown);
        assert_eq!(MatchQuality::from_label(""), MatchQuality::Unknown);
        // 大文字小文字は区別する
        assert_eq!(MatchQuality::from_label("Yes"), MatchQuality::Unknown);
    }

    #[test]
    fn test_from_fields() {
        let record = MatchRecord::from_fields(1, &fields("Kidney", "yes")).unwrap();
        assert_eq!(record.source_term(), "Kidney");
        assert_eq!(record.best_match(), "c1");
        assert_eq!(record.candidates().len(), CANDIDATE_COUNT);
        assert_eq!(record.candidates()[9], "c10");
        assert_eq!(record.quality(), MatchQuality::Good);
        assert_eq!(record.raw_quality(), "yes");
    }

    #[test]
    fn test_from_fields_ignores_extra_columns() {
        let mut f = fields("Liver", "no");
        f.push("extra".to_string());
        let record = MatchRecord::from_fields(1, &f).unwrap();
        assert_eq!(record.quality(), MatchQuality::None);
        assert_eq!(record.candidates()[9], "c10");
    }

    #[test]
    fn test_from_fields_too_short() {
        let f: Vec<String> = vec!["Kidney".into(), "Nephron".into()];
        let err = MatchRecord::from_fields(7, &f).unwrap_err();
        assert!(matches!(err, Error::DataFormat { line: 7, .. }));
    }

    #[test]
    fn test_new_wrong_candidate_count() {
        let err = MatchRecord::new(2, "Kidney", vec!["a".into(); 9], "yes").unwrap_err();
        match err {
            Error::DataFormat { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 10 candidates"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_quality_serialize() {
        let json = serde_json::to_string(&MatchQuality::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }
}
