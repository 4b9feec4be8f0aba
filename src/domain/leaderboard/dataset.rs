//! Dataset - one loaded document with its model registry

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::column::{ColumnKey, GroupId, GLOBAL_GROUP_ID};
use crate::domain::document::EvalDocument;
use crate::domain::group::{build_groups, ColumnGroups};
use crate::domain::model::{build_models, Model};
use crate::domain::view::ViewState;
use crate::domain::visibility::FilterSelection;

/// Metric used when the document declares none
pub const DEFAULT_METRIC: &str = "main_score";

/// Immutable snapshot of a data load
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    document: EvalDocument,
    models: Vec<Model>,
    metrics: Vec<String>,
}

impl Dataset {
    pub fn new(document: EvalDocument) -> Self {
        let models = build_models(&document.results, &document.models);
        let mut metrics: Vec<String> = document.metrics.iter().map(|m| m.id.clone()).collect();
        if metrics.is_empty() {
            metrics.push(DEFAULT_METRIC.to_string());
        }

        debug!(
            title = %document.title,
            models = models.len(),
            tasks = document.tasks.len(),
            groups = document.task_groups.len(),
            metrics = metrics.len(),
            "Dataset loaded"
        );

        Self {
            document,
            models,
            metrics,
        }
    }

    pub fn document(&self) -> &EvalDocument {
        &self.document
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Declared metric ids, or the implicit default metric
    pub fn metric_ids(&self) -> &[String] {
        &self.metrics
    }

    pub fn has_metric(&self, metric: &str) -> bool {
        self.metrics.iter().any(|m| m == metric)
    }

    /// `main_score` when available, else the first declared metric
    pub fn default_metric(&self) -> &str {
        if self.has_metric(DEFAULT_METRIC) {
            DEFAULT_METRIC
        } else {
            self.metrics.first().map(String::as_str).unwrap_or(DEFAULT_METRIC)
        }
    }

    /// Scoring metric for a request; unknown metrics fall back to the default
    pub fn resolve_metric(&self, requested: Option<&str>) -> String {
        match requested {
            Some(metric) if self.has_metric(metric) => metric.to_string(),
            Some(metric) => {
                warn!(metric, fallback = self.default_metric(), "Unknown metric requested");
                self.default_metric().to_string()
            }
            None => self.default_metric().to_string(),
        }
    }

    /// Initial view state: default sort and the first option of every facet
    pub fn default_view_state(&self) -> ViewState {
        ViewState::new().with_filters(FilterSelection::defaults(&self.document.filters))
    }

    /// Groups with every declared group open
    pub fn all_groups(&self) -> ColumnGroups {
        self.groups(&BTreeSet::new())
    }

    pub(crate) fn groups(&self, closed: &BTreeSet<String>) -> ColumnGroups {
        build_groups(&self.document.task_groups, &self.document.tasks, closed)
    }

    /// Resolve a flat column key against the fully open column set
    pub fn column(&self, raw: &str) -> Option<ColumnKey> {
        self.all_groups().column(raw)
    }

    /// Resolve a group id; only declared groups and the global group exist
    pub fn group_id(&self, raw: &str) -> Option<GroupId> {
        if raw == GLOBAL_GROUP_ID {
            return Some(GroupId::Global);
        }
        self.document
            .task_groups
            .iter()
            .find(|g| g.id == raw)
            .map(|g| GroupId::declared(&g.id))
    }
}
