//! Per-task result files and their flattening into score sheets

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::manifest::BenchmarkManifest;
use super::models::ModelEntry;
use crate::domain::{DomainError, MetricScores, ScoreSheet, DEFAULT_METRIC};

/// Scale a raw fraction to a percentage rounded to five decimals.
/// Lists contribute their first element.
pub fn normalize(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Array(items) => items.first()?.as_f64()?,
        other => other.as_f64()?,
    };
    Some((100.0 * raw * 1e5).round() / 1e5)
}

/// Flatten one task's result object.
///
/// The split object is selected first, then the language key when given.
/// Nested metric objects become `metric.sub`; non-numeric entries are skipped.
/// `main_score` is copied from the main metric, or 0 when that is absent.
pub fn flatten_task_result(
    result: &Value,
    split: &str,
    language: Option<&str>,
    main_metric: Option<&str>,
) -> Result<MetricScores, DomainError> {
    let mut selected = result
        .get(split)
        .ok_or_else(|| DomainError::validation(format!("Result has no '{}' split", split)))?;
    if let Some(language) = language {
        selected = selected.get(language).ok_or_else(|| {
            DomainError::validation(format!("Result split '{}' has no '{}' entry", split, language))
        })?;
    }
    let object = selected
        .as_object()
        .ok_or_else(|| DomainError::validation("Result split is not an object"))?;

    let mut scores = MetricScores::new();
    for (metric, value) in object {
        match value {
            Value::Object(nested) => {
                for (sub, value) in nested {
                    if let Some(v) = normalize(value) {
                        scores.insert(format!("{}.{}", metric, sub), v);
                    }
                }
            }
            other => {
                if let Some(v) = normalize(other) {
                    scores.insert(metric.clone(), v);
                }
            }
        }
    }

    let main = main_metric
        .and_then(|m| scores.get(m).copied())
        .unwrap_or(0.0);
    scores.insert(DEFAULT_METRIC.to_string(), main);
    Ok(scores)
}

fn read_task_result(path: &Path) -> Result<Value, DomainError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DomainError::io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| DomainError::parse(format!("Invalid result file {}: {}", path.display(), e)))
}

fn missing_task() -> MetricScores {
    MetricScores::from([(DEFAULT_METRIC.to_string(), 0.0)])
}

/// Score sheet of one model directory; tasks without a file score 0
pub fn load_model_results(
    dir: &Path,
    manifest: &BenchmarkManifest,
) -> Result<ScoreSheet, DomainError> {
    let mut sheet = ScoreSheet::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(task_name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(task) = manifest.task(task_name) else {
            continue;
        };

        let result = read_task_result(&path)?;
        let scores = flatten_task_result(
            &result,
            manifest.split_for(task),
            manifest.language_for(task),
            manifest.main_metric_for(task),
        )
        .map_err(|e| DomainError::validation(format!("{}: {}", path.display(), e)))?;
        sheet.insert_column(task_name, scores);
    }

    for task in &manifest.tasks {
        if !sheet.contains_column(&task.name) {
            warn!(dir = %dir.display(), task = %task.name, "No result file, scoring 0");
            sheet.insert_column(&task.name, missing_task());
        }
    }
    Ok(sheet)
}

/// Results of every configured model found under the results directory,
/// keyed by simple name
pub fn load_results(
    results_dir: &Path,
    models: &[ModelEntry],
    manifest: &BenchmarkManifest,
) -> Result<BTreeMap<String, ScoreSheet>, DomainError> {
    let mut results = BTreeMap::new();

    for entry in std::fs::read_dir(results_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !path.is_dir() || !models.iter().any(|m| m.simple_name() == name) {
            debug!(entry = name, "Skipping unconfigured results entry");
            continue;
        }

        let sheet = load_model_results(&path, manifest)?;
        results.insert(name.to_string(), sheet);
    }

    Ok(results)
}
