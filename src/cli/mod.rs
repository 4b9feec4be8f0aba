//! CLI module for the evaluation leaderboard
//!
//! Subcommands:
//! - `serve`: serve the document, health probes and the static frontend
//! - `render`: print a resolved view as JSON
//! - `export`: write a resolved view as CSV or HTML
//! - `prepare`: build a document from raw evaluation results

pub mod export;
pub mod prepare;
pub mod render;
pub mod serve;
mod view_args;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

pub use view_args::ViewArgs;

/// Evaluation leaderboard - rank models across benchmark tasks
#[derive(Parser)]
#[command(name = "eval-leaderboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the leaderboard document and frontend
    Serve(serve::ServeArgs),

    /// Print the resolved leaderboard view as JSON
    Render(render::RenderArgs),

    /// Export the resolved leaderboard view
    Export(export::ExportArgs),

    /// Build a leaderboard document from evaluation results
    Prepare(prepare::PrepareArgs),
}

/// Load `.env`, configuration and logging; shared by every command
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);
    config
}
