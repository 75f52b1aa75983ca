#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used types
pub use data::{DemoRounds, HttpRoundsApi, RoundPoller, RoundsApi};
pub use domain::{Direction, RoundState, RoundStatus};
pub use engine::{GraphEngine, ViewState};
pub use ui::UpDownApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the round service (native builds)
    #[arg(long, default_value = config::ROUNDS.default_base_url)]
    pub api_base: String,

    /// Run against the built-in demo round feed instead of the round service
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Seed for the line generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Picks the round feed the widget talks to.
pub fn rounds_api(args: &Cli) -> anyhow::Result<Arc<dyn RoundsApi>> {
    if args.demo {
        return Ok(Arc::new(DemoRounds::new(args.seed)));
    }
    Ok(Arc::new(HttpRoundsApi::new(args.api_base.clone())?))
}

/// Main application entry point - the composition root.
/// Builds the widget once and starts it.
pub fn run_app(
    cc: &eframe::CreationContext,
    api: Arc<dyn RoundsApi>,
    seed: Option<u64>,
) -> Box<dyn eframe::App> {
    let mut app = ui::UpDownApp::new(cc, api, seed);
    app.start();
    Box::new(app)
}
