//! Results preparation - builds a leaderboard document from raw evaluation output

mod manifest;
mod models;
mod results;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::domain::{DomainError, EvalDocument, ModelResults, ScoreSheet};

pub use manifest::{BenchmarkManifest, ManifestTask, TaskType};
pub use models::{load_model_list, ModelEntry};
pub use results::{flatten_task_result, load_model_results, load_results, normalize};

/// Assemble the document: groups from task types, models with their Hugging
/// Face URL, and one untagged result record per model directory found
pub fn build_document(
    manifest: &BenchmarkManifest,
    models: &[ModelEntry],
    results: BTreeMap<String, ScoreSheet>,
) -> EvalDocument {
    let results = results
        .into_iter()
        .map(|(id, sheet)| {
            let mut record = ModelResults::new(id, sheet);
            record.tags = Some(Vec::new());
            record
        })
        .collect();

    EvalDocument {
        title: manifest.title.clone(),
        description: Some(manifest.description.clone().unwrap_or_default()),
        paper: manifest.paper.clone(),
        citation: manifest.citation.clone(),
        options: manifest.options.clone(),
        metrics: manifest.metric_defs(),
        task_groups: manifest.task_group_defs(),
        tasks: manifest.task_defs(),
        models: models.iter().map(ModelEntry::to_model_def).collect(),
        results,
        filters: Vec::new(),
    }
}

/// Serialize with four-space indentation
pub fn write_document<W: Write>(document: &EvalDocument, out: W) -> Result<(), DomainError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(out, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| DomainError::export(format!("Failed to write document: {}", e)))
}

/// Inputs of a preparation run
#[derive(Debug, Clone)]
pub struct PrepareRequest<'a> {
    pub manifest: &'a Path,
    pub models: &'a Path,
    pub results: &'a Path,
}

/// Read the manifest, model list and results tree into a document
pub fn prepare(request: &PrepareRequest<'_>) -> Result<EvalDocument, DomainError> {
    let manifest = BenchmarkManifest::load(request.manifest)?;
    let models = load_model_list(request.models)?;
    let results = load_results(request.results, &models, &manifest)?;

    info!(
        tasks = manifest.tasks.len(),
        models = models.len(),
        with_results = results.len(),
        "Prepared leaderboard document"
    );

    Ok(build_document(&manifest, &models, results))
}
