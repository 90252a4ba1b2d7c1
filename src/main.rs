mod cli;
mod config;
mod gateway;
mod history;
mod logging;
mod model;
mod sim;
mod tui;

use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use cli::Cli;
use config::Config;
use gateway::{CannedGateway, GeminiGateway, SupportGateway};
use tui::App;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Diagnostics go to a file; the terminal belongs to the TUI.
    // Running without logging is fine.
    let _log_guard = logging::init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    // Without a key the chat panel still answers, from the canned table.
    let gateway: Arc<dyn SupportGateway> = match Config::api_key() {
        Some(key) if !cli.offline => Arc::new(GeminiGateway::new(key, &config)),
        _ => Arc::new(CannedGateway::new()),
    };
    info!(gateway = gateway.name(), "porta starting");

    if let Some(view) = cli.snapshot {
        let app = App::new(view, gateway);
        match tui::render_snapshot(&app, 100, 32) {
            Ok(frame) => print!("{frame}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = tui::run(App::new(cli.view, gateway)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    info!("porta shut down");
}
