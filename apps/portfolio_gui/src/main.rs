use std::{path::PathBuf, time::Duration};

mod controller;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::ui::{load_content, AppPaths, PortfolioApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(name = "portfolio-gui", about = "Personal portfolio page")]
struct Args {
    /// TOML file with the page content; the bundled content is used when omitted.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Directory holding preferences.json.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// How long the loading overlay stays up, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    splash_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let startup = StartupConfig {
        content_path: args.content,
        data_dir: args.data_dir,
        splash_delay: Duration::from_millis(args.splash_ms),
    };
    let paths = AppPaths::from_startup(&startup)?;
    let content = load_content(&startup)?;
    let app = PortfolioApp::bootstrap(&startup, &paths, content)?;
    let title = app.window_title().to_string();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native("portfolio-gui", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("portfolio window failed: {err}"))
}
