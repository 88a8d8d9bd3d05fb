use tracing_subscriber::EnvFilter;

/// RUST_LOG が未設定のときのフィルタ
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "term_lookup=debug,term_lookup_common=debug"
    } else {
        "term_lookup=info,term_lookup_common=info"
    }
}

/// ログ出力を初期化（標準エラーへ出力し、標準出力はJSON用に空けておく）
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
