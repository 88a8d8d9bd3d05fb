use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "term-lookup")]
#[command(about = "HuBMAP → HCA 用語照合ビューア", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 照合データセット（CSV/XLSX）
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// 先頭行もデータとして読む（ヘッダーなし）
    #[arg(long, global = true)]
    pub no_header: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話的に用語を選択して照合結果を表示
    Browse,

    /// 用語を1件照合
    Lookup {
        /// ソース用語（完全一致）
        #[arg(required = true)]
        term: String,

        /// 表示モデルをJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ソース用語の一覧を表示（データセット順）
    List {
        /// 部分一致で絞り込み（大文字小文字を無視）
        #[arg(short, long)]
        filter: Option<String>,

        /// 正規表現で絞り込み
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// データセットを検証（件数・重複用語）
    Check,

    /// 設定を表示/編集
    Config {
        /// 既定のデータセットを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
