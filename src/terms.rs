//! 用語一覧の絞り込み

use crate::error::Result;
use regex::Regex;
use term_lookup_common::TermIndex;

/// 部分一致・正規表現で絞り込んだ用語（データセット順）
pub fn select_terms<'a>(
    index: &'a TermIndex,
    filter: Option<&str>,
    pattern: Option<&str>,
) -> Result<Vec<&'a str>> {
    let mut terms = match filter {
        Some(query) => index.filter_terms(query),
        None => index.list_terms(),
    };

    if let Some(pattern) = pattern {
        let re = Regex::new(pattern)?;
        terms.retain(|term| re.is_match(term));
    }

    Ok(terms)
}
