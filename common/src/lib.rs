//! Term Lookup Common Library
//!
//! CLIとデスクトップで共有される照合データのインデックスと表示ロジック

pub mod types;
pub mod error;
pub mod source;
pub mod index;
pub mod config;
pub mod presenter;
pub mod theme;

pub use types::{MatchQuality, MatchRecord, CANDIDATE_COUNT, FIELD_COUNT};
pub use error::{Error, Result};
pub use source::{
    load_rows, read_csv_rows, read_spreadsheet_rows, DatasetKind, RawRow, SPREADSHEET_EXTENSIONS,
};
pub use index::{DuplicateTerm, TermIndex};
pub use config::{Config, DATA_ENV_VAR};
pub use presenter::{
    classify, present, present_with, BestMatchLine, Classification, DisplayModel, Labels,
    MatchIcon, Notice, NoticeCategory, RankedCandidate,
};
pub use theme::{NoticeStyle, Palette, Rgb};
