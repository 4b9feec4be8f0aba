//! Export writers for resolved views

mod csv_writer;
mod html_writer;

use std::io::Write;

use tracing::debug;

use crate::domain::{DomainError, ExportFormat, ResolvedView};

pub use csv_writer::write_csv;
pub use html_writer::{render_html, write_html};

/// Write a view in the requested format.
///
/// Workbooks are produced by an external writer; asking the built-in one for
/// `xlsx` is an error.
pub fn write_export<W: Write>(
    format: ExportFormat,
    view: &ResolvedView,
    title: &str,
    out: W,
) -> Result<(), DomainError> {
    debug!(%format, rows = view.rows.len(), "Writing export");

    match format {
        ExportFormat::Csv => write_csv(&view.export_matrix(), out),
        ExportFormat::Html => write_html(view, title, out),
        ExportFormat::Xlsx => Err(DomainError::export(
            "xlsx workbooks are not supported by the built-in writer; use csv or html",
        )),
    }
}
