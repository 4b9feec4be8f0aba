//! Model registry - merges result records with model metadata

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::entity::Model;
use crate::domain::document::{ModelDef, ModelResults};

/// Build one [`Model`] per result id.
///
/// Ids are unique in the output: when a result id repeats, the first record
/// is kept and later ones are skipped with a warning.
///
/// Metadata with a matching id wins on every presentation field it sets;
/// fields it leaves out keep the result record's own value. Scores always
/// come from the result record. Metadata without results is dropped.
pub fn build_models(results: &[ModelResults], model_defs: &[ModelDef]) -> Vec<Model> {
    let defs: HashMap<&str, &ModelDef> = model_defs.iter().map(|d| (d.id.as_str(), d)).collect();

    let mut seen = HashSet::new();
    let mut models = Vec::with_capacity(results.len());
    for record in results {
        if !seen.insert(record.id.as_str()) {
            warn!(model_id = %record.id, "Skipping duplicate result record");
            continue;
        }
        models.push(merge(record, defs.get(record.id.as_str()).copied()));
    }

    debug!(
        results = results.len(),
        metadata = model_defs.len(),
        models = models.len(),
        "Built model registry"
    );

    models
}

fn merge(record: &ModelResults, def: Option<&ModelDef>) -> Model {
    let pick = |meta: Option<&Option<String>>, own: &Option<String>| -> Option<String> {
        meta.and_then(|m| m.clone()).or_else(|| own.clone())
    };

    let name = pick(def.map(|d| &d.name), &record.name);
    let description = pick(def.map(|d| &d.description), &record.description);
    let url = pick(def.map(|d| &d.url), &record.url);
    let warning = pick(def.map(|d| &d.warning), &record.warning);
    let tags = def
        .and_then(|d| d.tags.clone())
        .or_else(|| record.tags.clone())
        .unwrap_or_default();

    let mut model = Model::new(record.id.clone(), record.results.clone()).with_tags(tags);
    if let Some(name) = name {
        model = model.with_name(name);
    }
    if let Some(description) = description {
        model = model.with_description(description);
    }
    if let Some(url) = url {
        model = model.with_url(url);
    }
    if let Some(warning) = warning {
        model = model.with_warning(warning);
    }
    model
}
