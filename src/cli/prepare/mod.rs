//! Prepare command - builds the leaderboard document from evaluation results

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::bootstrap;
use crate::infrastructure::prepare::{prepare, write_document, PrepareRequest};

#[derive(Args, Clone, Debug)]
pub struct PrepareArgs {
    /// Benchmark manifest (TOML)
    #[arg(long)]
    pub manifest: PathBuf,

    /// Model list file, or a directory of model list files
    #[arg(long)]
    pub models: PathBuf,

    /// Results directory laid out as `<model>/<task>.json`
    #[arg(long)]
    pub results: PathBuf,

    /// Where to write the document
    #[arg(long, default_value = "data.json")]
    pub output: PathBuf,
}

pub async fn run(args: PrepareArgs) -> anyhow::Result<()> {
    bootstrap();

    let document = prepare(&PrepareRequest {
        manifest: &args.manifest,
        models: &args.models,
        results: &args.results,
    })?;

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_document(&document, BufWriter::new(file))?;
    info!(path = %args.output.display(), "Leaderboard document written");

    Ok(())
}
