//! Average computation - strict all-or-nothing group means

use std::collections::HashMap;

use tracing::debug;

use crate::domain::column::ColumnKey;
use crate::domain::document::{MetricScores, TaskDef};
use crate::domain::group::ColumnGroups;
use crate::domain::model::Model;

/// Scores resolved for every column of the grid.
///
/// Task columns read straight from the model's raw scores; average columns
/// come from a table computed fresh on every rebuild, so raw input is never
/// touched and re-running the computation cannot compound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedScores {
    averages: HashMap<ColumnKey, HashMap<String, MetricScores>>,
}

impl ResolvedScores {
    /// Score of a model in a column for a metric, if present
    pub fn value(&self, model: &Model, column: &ColumnKey, metric: &str) -> Option<f64> {
        match column {
            ColumnKey::Task(task_id) => model.task_score(task_id, metric),
            ColumnKey::GroupAverage(_) | ColumnKey::GlobalAverage => self
                .averages
                .get(column)
                .and_then(|by_model| by_model.get(model.id()))
                .and_then(|scores| scores.get(metric))
                .copied(),
            ColumnKey::TasksWon => None,
        }
    }
}

/// Compute every group average and the global average for every model.
///
/// A (model, group, metric) average exists only when the model has a value for
/// that metric on every task of the group; it is then the sum divided by the
/// group's task count.
pub fn compute_averages(models: &[Model], groups: &ColumnGroups, metrics: &[String]) -> ResolvedScores {
    let mut averages = HashMap::new();

    for group in groups.iter() {
        averages.insert(
            group.average_key(),
            average_column(models, group.tasks().iter(), metrics),
        );
    }
    averages.insert(
        ColumnKey::GlobalAverage,
        average_column(models, groups.tasks(), metrics),
    );

    debug!(
        columns = averages.len(),
        models = models.len(),
        metrics = metrics.len(),
        "Computed averages"
    );

    ResolvedScores { averages }
}

fn average_column<'a>(
    models: &[Model],
    tasks: impl Iterator<Item = &'a TaskDef> + Clone,
    metrics: &[String],
) -> HashMap<String, MetricScores> {
    let mut by_model = HashMap::new();

    for model in models {
        let scores: MetricScores = metrics
            .iter()
            .filter_map(|metric| strict_mean(model, tasks.clone(), metric).map(|v| (metric.clone(), v)))
            .collect();
        if !scores.is_empty() {
            by_model.insert(model.id().to_string(), scores);
        }
    }

    by_model
}

fn strict_mean<'a>(model: &Model, tasks: impl Iterator<Item = &'a TaskDef>, metric: &str) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for task in tasks {
        sum += model.task_score(&task.id, metric)?;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::column::GroupId;
    use crate::domain::document::{ScoreSheet, TaskGroupDef};
    use crate::domain::group::build_groups;

    const METRIC: &str = "main_score";

    fn metrics() -> Vec<String> {
        vec![METRIC.to_string(), "accuracy".to_string()]
    }

    fn groups(closed: &[&str]) -> ColumnGroups {
        let defs = vec![TaskGroupDef::new("G1"), TaskGroupDef::new("G2")];
        let tasks = vec![
            TaskDef::new("A").with_group("G1"),
            TaskDef::new("B").with_group("G1"),
            TaskDef::new("C").with_group("G2"),
        ];
        let closed: BTreeSet<String> = closed.iter().map(|s| s.to_string()).collect();
        build_groups(&defs, &tasks, &closed)
    }

    fn g1() -> ColumnKey {
        ColumnKey::group_average(GroupId::declared("G1"))
    }

    #[test]
    fn test_group_average_is_arithmetic_mean() {
        let models = vec![
            Model::new(
                "M1",
                ScoreSheet::new()
                    .with("A", METRIC, 80.0)
                    .with("B", METRIC, 60.0)
                    .with("C", METRIC, 40.0),
            ),
        ];

        let scores = compute_averages(&models, &groups(&[]), &metrics());

        assert_eq!(scores.value(&models[0], &g1(), METRIC), Some(70.0));
        assert_eq!(scores.value(&models[0], &ColumnKey::GlobalAverage, METRIC), Some(60.0));
    }

    #[test]
    fn test_missing_task_makes_average_absent() {
        let models = vec![Model::new("M3", ScoreSheet::new().with("A", METRIC, 80.0).with("C", METRIC, 50.0))];

        let scores = compute_averages(&models, &groups(&[]), &metrics());

        assert_eq!(scores.value(&models[0], &g1(), METRIC), None);
        assert_eq!(scores.value(&models[0], &ColumnKey::GlobalAverage, METRIC), None);
        assert_eq!(
            scores.value(&models[0], &ColumnKey::group_average(GroupId::declared("G2")), METRIC),
            Some(50.0)
        );
    }

    #[test]
    fn test_zero_is_a_value_not_missing() {
        let models = vec![Model::new("M", ScoreSheet::new().with("A", METRIC, 0.0).with("B", METRIC, 10.0))];

        let scores = compute_averages(&models, &groups(&[]), &metrics());

        assert_eq!(scores.value(&models[0], &g1(), METRIC), Some(5.0));
    }

    #[test]
    fn test_averages_are_per_metric() {
        let models = vec![Model::new(
            "M",
            ScoreSheet::new()
                .with("A", METRIC, 1.0)
                .with("B", METRIC, 3.0)
                .with("A", "accuracy", 0.5),
        )];

        let scores = compute_averages(&models, &groups(&[]), &metrics());

        assert_eq!(scores.value(&models[0], &g1(), METRIC), Some(2.0));
        assert_eq!(scores.value(&models[0], &g1(), "accuracy"), None);
    }

    #[test]
    fn test_closed_group_leaves_global_average() {
        let models = vec![Model::new(
            "M",
            ScoreSheet::new().with("A", METRIC, 10.0).with("B", METRIC, 20.0).with("C", METRIC, 90.0),
        )];

        let scores = compute_averages(&models, &groups(&["G1"]), &metrics());

        assert_eq!(scores.value(&models[0], &ColumnKey::GlobalAverage, METRIC), Some(90.0));
        assert_eq!(scores.value(&models[0], &g1(), METRIC), None);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let models = vec![Model::new("M", ScoreSheet::new().with("A", METRIC, 10.0).with("B", METRIC, 20.0))];
        let groups = groups(&[]);

        let first = compute_averages(&models, &groups, &metrics());
        let second = compute_averages(&models, &groups, &metrics());

        assert_eq!(first, second);
    }

    #[test]
    fn test_tasks_won_has_no_score() {
        let models = vec![Model::new("M", ScoreSheet::new().with("A", METRIC, 10.0))];
        let scores = compute_averages(&models, &groups(&[]), &metrics());
        assert_eq!(scores.value(&models[0], &ColumnKey::TasksWon, METRIC), None);
    }
}
