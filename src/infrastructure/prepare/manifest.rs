//! Benchmark manifest - the TOML description of a benchmark's tasks

use std::path::Path;

use serde::Deserialize;

use crate::domain::{DocumentOptions, DomainError, MetricDef, TaskDef, TaskGroupDef};

fn default_split() -> String {
    "test".to_string()
}

fn default_language() -> String {
    "pl".to_string()
}

/// Category of tasks; becomes a task group of the document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskType {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Metric copied into `main_score` for tasks of this type
    pub main_metric: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestTask {
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: String,
    /// Overrides the manifest-wide split
    #[serde(default)]
    pub split: Option<String>,
    /// Results are keyed by language inside the split object
    #[serde(default)]
    pub multilingual: bool,
    /// Overrides the task type's main metric
    #[serde(default)]
    pub main_metric: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkManifest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub paper: Option<String>,
    #[serde(default)]
    pub citation: Option<String>,
    #[serde(default)]
    pub options: DocumentOptions,
    #[serde(default = "default_split")]
    pub split: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub metrics: Vec<MetricDef>,
    #[serde(default)]
    pub task_types: Vec<TaskType>,
    #[serde(default)]
    pub tasks: Vec<ManifestTask>,
}

impl BenchmarkManifest {
    pub fn from_toml(text: &str) -> Result<Self, DomainError> {
        let manifest: Self = toml::from_str(text)
            .map_err(|e| DomainError::parse(format!("Invalid benchmark manifest: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            DomainError::io(format!("Failed to read manifest {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    fn validate(&self) -> Result<(), DomainError> {
        for task in &self.tasks {
            if self.task_type(&task.task_type).is_none() {
                return Err(DomainError::validation(format!(
                    "Task '{}' has undeclared type '{}'",
                    task.name, task.task_type
                )));
            }
        }
        Ok(())
    }

    pub fn task_type(&self, id: &str) -> Option<&TaskType> {
        self.task_types.iter().find(|t| t.id == id)
    }

    pub fn task(&self, name: &str) -> Option<&ManifestTask> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn split_for<'a>(&'a self, task: &'a ManifestTask) -> &'a str {
        task.split.as_deref().unwrap_or(&self.split)
    }

    /// Language key for multilingual tasks, `None` otherwise
    pub fn language_for<'a>(&'a self, task: &ManifestTask) -> Option<&'a str> {
        task.multilingual.then_some(self.language.as_str())
    }

    pub fn main_metric_for<'a>(&'a self, task: &'a ManifestTask) -> Option<&'a str> {
        task.main_metric
            .as_deref()
            .or_else(|| self.task_type(&task.task_type).map(|t| t.main_metric.as_str()))
    }

    /// Declared metrics, or just `main_score`
    pub fn metric_defs(&self) -> Vec<MetricDef> {
        if self.metrics.is_empty() {
            let mut metric = MetricDef::new("main_score");
            metric.description = Some("Main score".to_string());
            vec![metric]
        } else {
            self.metrics.clone()
        }
    }

    pub fn task_group_defs(&self) -> Vec<TaskGroupDef> {
        self.task_types
            .iter()
            .map(|t| {
                let mut group = TaskGroupDef::new(&t.id);
                group.name = t.name.clone();
                group.description = Some(t.description.clone().unwrap_or_default());
                group
            })
            .collect()
    }

    pub fn task_defs(&self) -> Vec<TaskDef> {
        self.tasks
            .iter()
            .map(|t| TaskDef::new(&t.name).with_name(&t.name).with_group(&t.task_type))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::MANIFEST;
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = BenchmarkManifest::from_toml(MANIFEST).unwrap();

        assert_eq!(manifest.title, "PL-MTEB");
        assert!(manifest.options.closeable);
        assert_eq!(manifest.split, "test");
        assert_eq!(manifest.language, "pl");
        assert_eq!(manifest.tasks.len(), 3);
    }

    #[test]
    fn test_task_settings() {
        let manifest = BenchmarkManifest::from_toml(MANIFEST).unwrap();
        let msmarco = manifest.task("MSMARCO-PL").unwrap();
        let massive = manifest.task("MassiveIntent").unwrap();

        assert_eq!(manifest.split_for(msmarco), "validation");
        assert_eq!(manifest.split_for(massive), "test");
        assert_eq!(manifest.language_for(massive), Some("pl"));
        assert_eq!(manifest.language_for(msmarco), None);
        assert_eq!(manifest.main_metric_for(msmarco), Some("ndcg_at_10"));
    }

    #[test]
    fn test_document_definitions() {
        let manifest = BenchmarkManifest::from_toml(MANIFEST).unwrap();

        let groups = manifest.task_group_defs();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].description.as_deref(), Some(""));

        let tasks = manifest.task_defs();
        assert_eq!(tasks[2].group_id.as_deref(), Some("Retrieval"));
        assert_eq!(manifest.metric_defs()[0].id, "main_score");
    }

    #[test]
    fn test_undeclared_task_type_is_rejected() {
        let text = r#"
title = "Broken"

[[tasks]]
name = "X"
type = "Missing"
"#;
        let err = BenchmarkManifest::from_toml(text).unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = BenchmarkManifest::from_toml("title = ").unwrap_err();

        assert!(matches!(err, DomainError::Parse { .. }));
    }
}
