use std::path::PathBuf;
use std::sync::Arc;

use term_lookup_common::{present_with, DisplayModel, Labels, TermIndex};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub index: Option<Arc<TermIndex>>,
    pub selected: Option<String>,
    pub filter: String,
    pub source_path: Option<PathBuf>,
}

impl AppState {
    pub fn set_index(&mut self, index: TermIndex, path: PathBuf) {
        self.index = Some(Arc::new(index));
        self.selected = None;
        self.filter.clear();
        self.source_path = Some(path);
    }

    /// 絞り込み後の選択肢（データセット順）
    pub fn visible_terms(&self) -> Vec<String> {
        self.index
            .as_ref()
            .map(|index| {
                index
                    .filter_terms(&self.filter)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn display_model(&self, labels: &Labels) -> DisplayModel {
        let record = match (&self.index, &self.selected) {
            (Some(index), Some(term)) => index.lookup(term),
            _ => None,
        };
        present_with(labels, record)
    }
}
