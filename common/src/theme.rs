//! 表示テーマ（通知ブロックの配色）
//!
//! 品質分類そのものは presenter が決める。ここでは分類カテゴリを
//! 色に解決するだけで、配色はUI層（設定ファイル）から差し替えられる。

use crate::presenter::NoticeCategory;
use serde::{Deserialize, Serialize};

/// RGBカラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
}

/// 通知ブロックのスタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeStyle {
    pub background: Rgb,
    pub foreground: Rgb,
}

/// カテゴリ別の配色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub positive: NoticeStyle,
    pub negative: NoticeStyle,
    pub neutral: NoticeStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            positive: NoticeStyle {
                background: Rgb::GREEN,
                foreground: Rgb::WHITE,
            },
            negative: NoticeStyle {
                background: Rgb::RED,
                foreground: Rgb::WHITE,
            },
            neutral: NoticeStyle {
                background: Rgb::YELLOW,
                foreground: Rgb::BLACK,
            },
        }
    }
}

impl Palette {
    pub fn style(&self, category: NoticeCategory) -> NoticeStyle {
        match category {
            NoticeCategory::Positive => self.positive,
            NoticeCategory::Negative => self.negative,
            NoticeCategory::Neutral => self.neutral,
        }
    }
}
