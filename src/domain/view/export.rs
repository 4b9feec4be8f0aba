//! Flat export matrix shared by every export format

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::cell::Cell;

/// Default file name stem of an export
pub const EXPORT_FILE_STEM: &str = "export";

/// Target formats of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Html => "html",
        }
    }

    /// Suggested file name, e.g. `export.csv`
    pub fn file_name(&self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            "html" => Ok(Self::Html),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

/// A plain scalar of the export matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExportValue {
    Number(f64),
    Text(String),
}

impl ExportValue {
    /// Numbers where the whole text parses as one, strings otherwise.
    /// Line breaks inside labels become spaces.
    pub fn from_text(text: &str) -> Self {
        let text = text.replace('\n', " ");
        match text.trim().parse::<f64>() {
            Ok(number) if !text.trim().is_empty() && number.is_finite() => Self::Number(number),
            _ => Self::Text(text),
        }
    }

    pub fn empty() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for ExportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Row-major matrix of scalars mirroring the rendered grid
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExportMatrix {
    rows: Vec<Vec<ExportValue>>,
}

impl ExportMatrix {
    /// Flatten cell rows; spanning cells keep their label in the first
    /// sub-cell and pad the rest of the span with empty strings.
    pub fn from_cells<'a>(rows: impl IntoIterator<Item = &'a [Cell]>) -> Self {
        let rows = rows
            .into_iter()
            .map(|cells| cells.iter().flat_map(export_cell).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<ExportValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn export_cell(cell: &Cell) -> Vec<ExportValue> {
    let mut values = vec![ExportValue::from_text(&cell.value)];
    values.resize(cell.span(), ExportValue::empty());
    values
}
