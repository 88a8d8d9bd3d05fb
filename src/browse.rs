//! 対話式用語検索モジュール
//!
//! ソース用語を選択するたびに照合結果を表示する。Esc/q で終了。

use crate::error::{AppError, Result};
use crate::render::print_model;
use dialoguer::FuzzySelect;
use term_lookup_common::{present_with, Labels, MatchRecord, Palette, TermIndex};

/// 対話セッション（読み込み済みインデックスを借用する）
pub struct BrowseSession<'a> {
    index: &'a TermIndex,
    labels: &'a Labels,
    palette: &'a Palette,
}

impl<'a> BrowseSession<'a> {
    pub fn new(index: &'a TermIndex, labels: &'a Labels, palette: &'a Palette) -> Self {
        Self {
            index,
            labels,
            palette,
        }
    }

    /// 選択番号をレコードに解決（範囲外・未選択は `None`）
    pub fn resolve(&self, choice: Option<usize>) -> Option<&'a MatchRecord> {
        let terms = self.index.list_terms();
        choice
            .and_then(|i| terms.get(i).copied())
            .and_then(|term| self.index.lookup(term))
    }

    pub fn run(&self) -> Result<()> {
        let terms = self.index.list_terms();
        let mut current: Option<usize> = None;

        println!("🔎 {}\n", self.labels.title());
        println!("操作: 文字入力で絞り込み [Enter]選択 [Esc]終了\n");

        // 未選択の状態は何も描画しない
        print_model(&present_with(self.labels, None), self.palette);

        loop {
            let choice = FuzzySelect::new()
                .with_prompt("Select a term")
                .items(&terms)
                .default(current.unwrap_or(0))
                .interact_opt()
                .map_err(|e| AppError::Prompt(e.to_string()))?;

            let Some(selected) = choice else {
                break;
            };

            current = Some(selected);
            let record = self.resolve(current);
            tracing::debug!(term = terms[selected], found = record.is_some(), "term selected");

            println!();
            print_model(&present_with(self.labels, record), self.palette);
            println!();
        }

        Ok(())
    }
}
