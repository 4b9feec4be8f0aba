//! Sparse column -> metric -> score mapping

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Scores of one column, keyed by metric id
pub type MetricScores = BTreeMap<String, f64>;

/// Sparse per-column, per-metric scores of a single model
///
/// Parsing is lenient: anything that is not a number is treated as a missing
/// value rather than rejected, so a sloppy results file degrades to empty
/// cells instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreSheet(BTreeMap<String, MetricScores>);

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, column: impl Into<String>, metric: impl Into<String>, value: f64) -> Self {
        self.insert(column, metric, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, metric: impl Into<String>, value: f64) {
        self.0
            .entry(column.into())
            .or_default()
            .insert(metric.into(), value);
    }

    /// Insert every metric of a column at once
    pub fn insert_column(&mut self, column: impl Into<String>, scores: MetricScores) {
        self.0.insert(column.into(), scores);
    }

    pub fn get(&self, column: &str, metric: &str) -> Option<f64> {
        self.0.get(column).and_then(|scores| scores.get(metric)).copied()
    }

    pub fn column(&self, column: &str) -> Option<&MetricScores> {
        self.0.get(column)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.0.contains_key(column)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_value(value: Value) -> Self {
        let mut sheet = Self::new();
        let Value::Object(columns) = value else {
            return sheet;
        };

        for (column, metrics) in columns {
            let Value::Object(metrics) = metrics else {
                continue;
            };
            let scores: MetricScores = metrics
                .into_iter()
                .filter_map(|(metric, value)| value.as_f64().map(|v| (metric, v)))
                .collect();
            if !scores.is_empty() {
                sheet.insert_column(column, scores);
            }
        }

        sheet
    }
}

impl<'de> Deserialize<'de> for ScoreSheet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}
