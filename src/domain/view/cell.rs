//! Display cells consumed by the presentation layer

use serde::Serialize;

/// Kind of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellKind {
    Empty,
    HeaderGroup,
    SortableHeader,
    Header,
    Value,
    RowId,
    RowIdHeader,
}

/// One cell of a header or body row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: CellKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colspan: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Column the cell sorts or toggles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Cell {
    pub fn new(kind: CellKind, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind,
            colspan: None,
            classes: Vec::new(),
            column_id: None,
            url: None,
            description: None,
            warning: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(CellKind::Empty, "")
    }

    /// Numeric value cell; absent scores render as an empty string
    pub fn score(value: Option<f64>) -> Self {
        Self::new(CellKind::Value, format_score(value))
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_colspan(mut self, colspan: usize) -> Self {
        self.colspan = Some(colspan);
        self
    }

    pub fn with_column_id(mut self, column_id: impl Into<String>) -> Self {
        self.column_id = Some(column_id.into());
        self
    }

    pub fn with_url(mut self, url: Option<&str>) -> Self {
        self.url = url.map(str::to_string);
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn with_warning(mut self, warning: Option<&str>) -> Self {
        self.warning = warning.map(str::to_string);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn span(&self) -> usize {
        self.colspan.unwrap_or(1).max(1)
    }
}

/// Two decimal places, or empty when absent. Zero is a real score.
pub fn format_score(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}
