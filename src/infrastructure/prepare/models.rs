//! Evaluated model list

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{DomainError, ModelDef};

const MODEL_URL_BASE: &str = "https://huggingface.co";

/// One entry of a model list; extra fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelEntry {
    pub model_name: String,
}

impl ModelEntry {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }

    /// Last `/`-separated segment; names the results directory
    pub fn simple_name(&self) -> &str {
        self.model_name.rsplit('/').next().unwrap_or(&self.model_name)
    }

    pub fn url(&self) -> String {
        format!("{}/{}", MODEL_URL_BASE, self.model_name)
    }

    pub fn to_model_def(&self) -> ModelDef {
        ModelDef {
            id: self.simple_name().to_string(),
            name: Some(self.model_name.clone()),
            url: Some(self.url()),
            ..Default::default()
        }
    }
}

fn parse_model_list(path: &Path) -> Result<Vec<ModelEntry>, DomainError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::io(format!("Failed to read model list {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&text).map_err(|e| {
        DomainError::parse(format!("Invalid model list {}: {}", path.display(), e))
    })
}

/// Load a model list file, or every list file in a directory (in name order)
pub fn load_model_list(path: &Path) -> Result<Vec<ModelEntry>, DomainError> {
    if !path.is_dir() {
        return parse_model_list(path);
    }

    let mut files = std::fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    files.retain(|p| p.is_file());
    files.sort();

    let mut models = Vec::new();
    for file in files {
        let entries = parse_model_list(&file)?;
        debug!(file = %file.display(), models = entries.len(), "Read model list");
        models.extend(entries);
    }
    Ok(models)
}
