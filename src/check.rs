//! データセット検証モジュール
//!
//! `check` コマンド用に品質ラベルの内訳と未知ラベルを集計する。

use std::collections::HashSet;
use term_lookup_common::{MatchQuality, TermIndex};

/// 品質ラベルの集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSummary {
    pub good: usize,
    pub none: usize,
    pub unknown: usize,
    /// 未知ラベル（データセット順、重複なし）
    pub unknown_labels: Vec<String>,
}

impl DatasetSummary {
    pub fn from_index(index: &TermIndex) -> Self {
        let mut summary = Self::default();
        let mut seen = HashSet::new();

        for record in index.records() {
            match record.quality() {
                MatchQuality::Good => summary.good += 1,
                MatchQuality::None => summary.none += 1,
                MatchQuality::Unknown => {
                    summary.unknown += 1;
                    let label = record.raw_quality().trim().to_string();
                    if seen.insert(label.clone()) {
                        summary.unknown_labels.push(label);
                    }
                }
            }
        }

        summary
    }

    pub fn total(&self) -> usize {
        self.good + self.none + self.unknown
    }
}
