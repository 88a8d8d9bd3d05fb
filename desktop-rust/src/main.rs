mod app;
mod io;
mod model;

use app::DesktopApp;
use term_lookup_common::Config;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("term_lookup_desktop=info,term_lookup_common=info")),
        )
        .init();

    // 設定ファイルはCLIと共有
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config not loaded, using defaults");
        Config::default()
    });
    let title = config.labels.title();
    let arg = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let initial = io::startup_dataset(arg, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(DesktopApp::new(config, initial))),
    )
}
