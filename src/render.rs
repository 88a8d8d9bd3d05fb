//! ターミナル描画モジュール
//!
//! `DisplayModel` を行単位のテキストに変換する。色付けはパレットの
//! 背景色・文字色を truecolor で適用する。

use colored::Colorize;
use term_lookup_common::{DisplayModel, Notice, Palette};

/// 表示モデルを行に変換（空のモデルは0行）
pub fn render_lines(model: &DisplayModel, palette: &Palette, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(header) = &model.header {
        lines.push(if use_color {
            header.bold().to_string()
        } else {
            header.clone()
        });
    }

    if let Some(best) = &model.best_match {
        lines.push(format!("  {}: {}", best.label, best.term));
    }

    if let Some(notice) = &model.notice {
        lines.push(format!("  {}", render_notice(notice, palette, use_color)));
    }

    if !model.candidates.is_empty() {
        lines.push(String::new());
        if let Some(heading) = &model.candidates_heading {
            lines.push(if use_color {
                heading.bold().to_string()
            } else {
                heading.clone()
            });
        }
        let width = model.candidates.len().to_string().len();
        for candidate in &model.candidates {
            lines.push(format!("  {:>width$}. {}", candidate.rank, candidate.term));
        }
    }

    lines
}

fn render_notice(notice: &Notice, palette: &Palette, use_color: bool) -> String {
    let text = format!(" {} {} ", notice.icon.glyph(), notice.text);
    if !use_color {
        return text;
    }

    let style = palette.style(notice.category);
    text.truecolor(style.foreground.0, style.foreground.1, style.foreground.2)
        .on_truecolor(style.background.0, style.background.1, style.background.2)
        .to_string()
}

/// 標準出力へ描画
pub fn print_model(model: &DisplayModel, palette: &Palette) {
    for line in render_lines(model, palette, true) {
        println!("{}", line);
    }
}
