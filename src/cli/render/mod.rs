//! Render command - prints the resolved view as JSON

use std::io::Write;

use clap::Args;
use tracing::info;

use super::{bootstrap, ViewArgs};
use crate::domain::resolve;
use crate::infrastructure::DocumentLoader;

#[derive(Args, Clone, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Load the document, resolve one view and write it to stdout
pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let source = args.view.source(&config);
    let dataset = DocumentLoader::from_source(source).load().await?;
    let state = args.view.view_state(&dataset, &config)?;
    let view = resolve(&dataset, &state);
    info!(metric = %view.metric, rows = view.rows.len(), "Rendered leaderboard");

    let mut stdout = std::io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &view)?;
    } else {
        serde_json::to_writer(&mut stdout, &view)?;
    }
    writeln!(stdout)?;

    Ok(())
}
