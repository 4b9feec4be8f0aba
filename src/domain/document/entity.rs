//! Leaderboard document and the object definitions it carries

use serde::{Deserialize, Serialize};

use super::scores::ScoreSheet;

/// Metric reported in result sheets (e.g. `main_score`, `accuracy`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetricDef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Named category that collects tasks declaring its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroupDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl TaskGroupDef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            url: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A single benchmark task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl TaskDef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            group_id: None,
            description: None,
            url: None,
            warning: None,
            tags: None,
        }
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Model metadata, merged onto result records by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Raw result record: model id, optional inline metadata, sparse scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResults {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub results: ScoreSheet,
}

impl ModelResults {
    pub fn new(id: impl Into<String>, results: ScoreSheet) -> Self {
        Self {
            id: id.into(),
            results,
            ..Default::default()
        }
    }
}

/// One selectable option of a filter facet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FilterOption {
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            name: Some(name.into()),
        }
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.tag)
    }
}

/// Named filter facet with ordered options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDef {
    pub name: String,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

/// Presentation switches carried by the document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOptions {
    #[serde(default)]
    pub closeable: bool,
    #[serde(default)]
    pub expandable: bool,
    #[serde(default)]
    pub show_help: bool,
    #[serde(default)]
    pub show_footer: bool,
}

/// The whole leaderboard input, fetched once per data load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalDocument {
    #[serde(default)]
    pub title: String,
    /// Markup rendered verbatim by the caller; opaque here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default)]
    pub options: DocumentOptions,
    #[serde(default)]
    pub metrics: Vec<MetricDef>,
    #[serde(default)]
    pub task_groups: Vec<TaskGroupDef>,
    #[serde(default)]
    pub tasks: Vec<TaskDef>,
    #[serde(default)]
    pub models: Vec<ModelDef>,
    #[serde(default)]
    pub results: Vec<ModelResults>,
    #[serde(default)]
    pub filters: Vec<FilterDef>,
}

impl EvalDocument {
    /// Parse a document from its JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "title": "PL-MTEB",
            "description": "<b>Polish</b> benchmark",
            "paper": "https://arxiv.org/abs/2405.10138",
            "options": {"closeable": true, "showHelp": false},
            "metrics": [{"id": "main_score", "description": "Main score"}],
            "taskGroups": [{"id": "Retrieval", "description": ""}],
            "tasks": [{"id": "NQ-PL", "name": "NQ-PL", "groupId": "Retrieval"}],
            "models": [{"id": "e5", "name": "intfloat/e5", "url": "https://huggingface.co/intfloat/e5"}],
            "results": [{"id": "e5", "tags": [], "results": {"NQ-PL": {"main_score": 51.2}}}],
            "filters": [{"name": "Size", "options": [{"tag": "none", "name": "All"}, {"tag": "small", "name": "Small"}]}]
        }"#;

        let doc = EvalDocument::from_json(json).unwrap();

        assert_eq!(doc.title, "PL-MTEB");
        assert!(doc.options.closeable);
        assert!(!doc.options.expandable);
        assert_eq!(doc.task_groups[0].display_name(), "Retrieval");
        assert_eq!(doc.tasks[0].group_id.as_deref(), Some("Retrieval"));
        assert_eq!(doc.results[0].results.get("NQ-PL", "main_score"), Some(51.2));
        assert_eq!(doc.filters[0].options[1].label(), "Small");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let doc = EvalDocument::from_json(r#"{"title": "Empty"}"#).unwrap();

        assert!(doc.metrics.is_empty());
        assert!(doc.task_groups.is_empty());
        assert!(doc.filters.is_empty());
        assert_eq!(doc.options, DocumentOptions::default());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let task = TaskDef::new("CBD");
        assert_eq!(task.display_name(), "CBD");
        assert_eq!(task.with_name("Cyberbullying").display_name(), "Cyberbullying");
    }
}
