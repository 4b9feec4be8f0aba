//! Model entity - a result record enriched with its metadata

use serde::Serialize;

use crate::domain::document::ScoreSheet;

/// A leaderboard row: identity, presentation metadata and raw scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    /// Unique identifier, also the final tie-breaker in every ranking
    id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,

    /// Tags matched against the active filter selection
    tags: Vec<String>,

    /// Raw task scores as loaded; never mutated after construction
    scores: ScoreSheet,
}

impl Model {
    /// Create a new Model with only an id and its scores
    pub fn new(id: impl Into<String>, scores: ScoreSheet) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            url: None,
            warning: None,
            tags: Vec::new(),
            scores,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    // Getters

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name shown in the row header, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn scores(&self) -> &ScoreSheet {
        &self.scores
    }

    /// Raw score of a task for a metric
    pub fn task_score(&self, task_id: &str, metric: &str) -> Option<f64> {
        self.scores.get(task_id, metric)
    }
}
