//! 照合結果の表示モデル生成
//!
//! 品質ラベル → 表示分類（カテゴリ・アイコン・短文）の対応表と、
//! 選択中のレコードを描画用の `DisplayModel` に変換する純粋関数。

use crate::types::{MatchQuality, MatchRecord};
use serde::{Deserialize, Serialize};

/// 通知ブロックの意味的スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Positive,
    Negative,
    Neutral,
}

/// 品質アイコン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchIcon {
    CheckMark,
    CrossMark,
    QuestionMark,
}

impl MatchIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MatchIcon::CheckMark => "✔",
            MatchIcon::CrossMark => "✘",
            MatchIcon::QuestionMark => "?",
        }
    }
}

/// 品質の表示分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: NoticeCategory,
    pub icon: MatchIcon,
    pub short_text: &'static str,
}

/// 品質 → 表示分類（全域関数）
pub fn classify(quality: MatchQuality) -> Classification {
    match quality {
        MatchQuality::Good => Classification {
            category: NoticeCategory::Positive,
            icon: MatchIcon::CheckMark,
            short_text: "Good Match",
        },
        MatchQuality::None => Classification {
            category: NoticeCategory::Negative,
            icon: MatchIcon::CrossMark,
            short_text: "No match found",
        },
        MatchQuality::Unknown => Classification {
            category: NoticeCategory::Neutral,
            icon: MatchIcon::QuestionMark,
            short_text: "Match quality unknown",
        },
    }
}

/// 語彙名（見出し文言の生成に使用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// 選択側の語彙
    pub source_vocabulary: String,
    /// 照合先の語彙
    pub target_vocabulary: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            source_vocabulary: "HuBMAP".into(),
            target_vocabulary: "HCA".into(),
        }
    }
}

impl Labels {
    /// ページタイトル
    pub fn title(&self) -> String {
        format!("{} to {} term", self.source_vocabulary, self.target_vocabulary)
    }

    pub fn header(&self, term: &str) -> String {
        format!("Selected {} term: {}", self.source_vocabulary, term)
    }

    pub fn best_match_label(&self) -> String {
        format!("Best {} Match", self.target_vocabulary)
    }

    pub fn candidates_heading(&self) -> String {
        format!("Top 10 matching {} terms", self.target_vocabulary)
    }
}

/// 通知ブロック
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub category: NoticeCategory,
    pub icon: MatchIcon,
    pub text: String,
}

impl From<Classification> for Notice {
    fn from(c: Classification) -> Self {
        Self {
            category: c.category,
            icon: c.icon,
            text: c.short_text.to_string(),
        }
    }
}

/// 最良一致の行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestMatchLine {
    pub label: String,
    pub term: String,
}

/// 順位付き候補（順位は表示側で採番、1始まり）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub term: String,
}

/// 描画用の表示モデル
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub header: Option<String>,
    pub notice: Option<Notice>,
    pub best_match: Option<BestMatchLine>,
    pub candidates_heading: Option<String>,
    pub candidates: Vec<RankedCandidate>,
}

impl DisplayModel {
    /// 何も描画しない状態か
    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.notice.is_none()
            && self.best_match.is_none()
            && self.candidates.is_empty()
    }
}

/// 既定の語彙名で表示モデルを生成
pub fn present(selection: Option<&MatchRecord>) -> DisplayModel {
    present_with(&Labels::default(), selection)
}

/// 表示モデルを生成
///
/// 未選択なら空のモデル。品質が `None` の場合は候補が存在していても
/// 最良一致と候補一覧を出さず、否定の通知のみを返す。
pub fn present_with(labels: &Labels, selection: Option<&MatchRecord>) -> DisplayModel {
    let Some(record) = selection else {
        return DisplayModel::default();
    };

    let header = Some(labels.header(record.source_term()));
    let classification = classify(record.quality());

    if record.quality() == MatchQuality::None {
        return DisplayModel {
            header,
            notice: Some(classification.into()),
            ..Default::default()
        };
    }

    let candidates = record
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, term)| RankedCandidate {
            rank: i + 1,
            term: term.clone(),
        })
        .collect();

    DisplayModel {
        header,
        notice: Some(classification.into()),
        best_match: Some(BestMatchLine {
            label: labels.best_match_label(),
            term: record.best_match().to_string(),
        }),
        candidates_heading: Some(labels.candidates_heading()),
        candidates,
    }
}
