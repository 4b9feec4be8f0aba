//! Standalone HTML table export

use std::io::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::{Cell, CellKind, DomainError, ResolvedView};

const STYLE: &str = "table{border-collapse:collapse;font-family:sans-serif}\
th,td{padding:4px 8px;text-align:center}\
.cell-border{border-left:1px solid #ccc}\
.cell-sticky{text-align:left}\
.cell-gold{background:#ffd70066}\
.cell-silver{background:#c0c0c066}\
.cell-bronze{background:#cd7f3266}";

fn attributes(cell: &Cell) -> String {
    let mut attrs = String::new();
    if let Some(colspan) = cell.colspan.filter(|span| *span > 1) {
        attrs.push_str(&format!(" colspan=\"{}\"", colspan));
    }
    if !cell.classes.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", encode_double_quoted_attribute(&cell.classes.join(" "))));
    }
    if let Some(description) = &cell.description {
        attrs.push_str(&format!(" title=\"{}\"", encode_double_quoted_attribute(description)));
    }
    attrs
}

fn content(cell: &Cell) -> String {
    let text = encode_text(&cell.value).replace('\n', "<br>");
    match (&cell.kind, &cell.url) {
        (CellKind::RowId | CellKind::HeaderGroup, Some(url)) => {
            format!("<a href=\"{}\">{}</a>", encode_double_quoted_attribute(url), text)
        }
        _ => text,
    }
}

fn render_row(cells: &[Cell], tag: &str) -> String {
    let mut html = String::from("<tr>");
    for cell in cells {
        html.push_str(&format!("<{tag}{}>{}</{tag}>", attributes(cell), content(cell)));
    }
    html.push_str("</tr>\n");
    html
}

/// Render the resolved view as a self-contained HTML page
pub fn render_html(view: &ResolvedView, title: &str) -> String {
    let title = encode_text(title);
    let mut html = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n<table>\n<thead>\n"
    );
    html.push_str(&render_row(&view.top_header, "th"));
    html.push_str(&render_row(&view.main_header, "th"));
    html.push_str("</thead>\n<tbody>\n");
    for row in &view.rows {
        html.push_str(&render_row(row, "td"));
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

pub fn write_html<W: Write>(view: &ResolvedView, title: &str, mut out: W) -> Result<(), DomainError> {
    out.write_all(render_html(view, title).as_bytes())?;
    out.flush()?;
    Ok(())
}
