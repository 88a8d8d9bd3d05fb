use clap::Parser;
use term_lookup::{browse, check, cli, dataset, error, logging, render, terms};
use cli::{Cli, Commands};
use error::Result;
use term_lookup_common::{present_with, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;
    let has_header = config.has_header && !cli.no_header;

    match cli.command {
        Commands::Browse => {
            let data_path = config.resolve_data_path(cli.data.as_deref())?;
            // 読み込みに失敗した場合は選択を受け付けずに終了
            let index = dataset::load_index(&data_path, has_header)?;
            let session = browse::BrowseSession::new(&index, &config.labels, &config.palette);
            session.run()?;
        }

        Commands::Lookup { term, json } => {
            let data_path = config.resolve_data_path(cli.data.as_deref())?;
            let index = dataset::load_index(&data_path, has_header)?;
            let record = index.lookup(&term);
            let model = present_with(&config.labels, record);

            if json {
                println!("{}", serde_json::to_string_pretty(&model)?);
            } else if record.is_none() {
                println!("⚠ 用語が見つかりません: {}", term);
            } else {
                render::print_model(&model, &config.palette);
            }
        }

        Commands::List { filter, pattern } => {
            let data_path = config.resolve_data_path(cli.data.as_deref())?;
            let index = dataset::load_index(&data_path, has_header)?;
            let selected = terms::select_terms(&index, filter.as_deref(), pattern.as_deref())?;
            for term in &selected {
                println!("{}", term);
            }
            tracing::debug!(shown = selected.len(), total = index.len(), "terms listed");
        }

        Commands::Check => {
            let data_path = config.resolve_data_path(cli.data.as_deref())?;
            println!("📋 term-lookup - データセット検証\n");

            let index = dataset::load_index(&data_path, has_header)?;
            println!("✔ {}件の用語を読み込み: {}", index.len(), data_path.display());

            let summary = check::DatasetSummary::from_index(&index);
            println!(
                "  品質ラベル: yes {}件 / no {}件 / 不明 {}件",
                summary.good, summary.none, summary.unknown
            );
            if !summary.unknown_labels.is_empty() {
                let labels: Vec<String> = summary
                    .unknown_labels
                    .iter()
                    .map(|l| if l.is_empty() { "(空)".to_string() } else { format!("\"{}\"", l) })
                    .collect();
                println!("⚠ 未知の品質ラベル: {}", labels.join(", "));
            }

            if index.duplicates().is_empty() {
                println!("✔ 重複用語なし");
            } else {
                println!("⚠ 重複用語: {}件（先頭の行を採用）", index.duplicates().len());
                for dup in index.duplicates() {
                    println!("  - {} ({}行目 → {}行目を採用)", dup.term, dup.line, dup.kept_line);
                }
            }
        }

        Commands::Config { set_data, show } => {
            let mut config = config;

            if let Some(path) = set_data {
                config.set_data_path(path)?;
                println!("✔ データセットを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!(
                    "  データセット: {}",
                    config
                        .data_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
                println!("  ヘッダー行: {}", if config.has_header { "あり" } else { "なし" });
                println!("  タイトル: {}", config.labels.title());
                println!(
                    "  語彙: {} → {}",
                    config.labels.source_vocabulary, config.labels.target_vocabulary
                );
            }
        }
    }

    Ok(())
}
