//! Export command - writes the resolved view as CSV or HTML

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::{bootstrap, ViewArgs};
use crate::domain::{resolve, ExportFormat};
use crate::infrastructure::{write_export, DocumentLoader};

#[derive(Args, Clone, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Output format: csv, html or xlsx
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file; defaults to `export.<ext>`, `-` writes to stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.file_name()))
    }
}

pub async fn run(args: ExportArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let source = args.view.source(&config);
    let dataset = DocumentLoader::from_source(source).load().await?;
    let state = args.view.view_state(&dataset, &config)?;
    let view = resolve(&dataset, &state);
    let title = dataset.document().title.as_str();

    // A failed export writes nothing
    let mut buffer = Vec::new();
    write_export(args.format, &view, title, &mut buffer)?;

    let path = args.output_path();
    if path.as_os_str() == "-" {
        std::io::stdout().lock().write_all(&buffer)?;
        return Ok(());
    }

    std::fs::write(&path, &buffer)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), format = %args.format, rows = view.rows.len(), "Export written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_name() {
        let args = ExportArgs {
            view: ViewArgs::default(),
            format: ExportFormat::Html,
            output: None,
        };

        assert_eq!(args.output_path(), PathBuf::from("export.html"));
    }
}
