//! Rank resolver - per-column orderings, tasks won and podiums

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::achievement::Achievement;
use crate::domain::average::ResolvedScores;
use crate::domain::column::ColumnKey;
use crate::domain::group::ColumnGroups;
use crate::domain::model::Model;
use crate::domain::visibility::Visibility;

/// Best-first ordering of two (value, id) entries.
///
/// Higher values come first; a missing value sorts after every present one;
/// equal or missing values fall back to ascending id.
pub fn compare_entries(a: (Option<f64>, &str), b: (Option<f64>, &str)) -> Ordering {
    let by_value = match (a.0, b.0) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_value.then_with(|| a.1.cmp(b.1))
}

/// Rank lists of every column for one metric and one visible model set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    metric: String,
    ranks: HashMap<ColumnKey, Vec<String>>,
    tasks_won: HashMap<String, usize>,
}

impl Ranking {
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Ranked model ids of a column, best first; empty for unknown columns
    pub fn ranks(&self, column: &ColumnKey) -> &[String] {
        self.ranks.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn position(&self, column: &ColumnKey, model_id: &str) -> Option<usize> {
        self.ranks(column).iter().position(|id| id == model_id)
    }

    /// Podium badge of a model in a column, looked up from the rank list
    pub fn achievement(&self, column: &ColumnKey, model_id: &str) -> Option<Achievement> {
        self.ranks(column)
            .iter()
            .take(3)
            .position(|id| id == model_id)
            .and_then(Achievement::from_position)
    }

    pub fn tasks_won(&self, model_id: &str) -> usize {
        self.tasks_won.get(model_id).copied().unwrap_or(0)
    }

    /// Value a column is ranked by
    pub fn value(&self, scores: &ResolvedScores, model: &Model, column: &ColumnKey) -> Option<f64> {
        match column {
            ColumnKey::TasksWon => Some(self.tasks_won(model.id()) as f64),
            _ => scores.value(model, column, &self.metric),
        }
    }

    /// Order two models by a column
    pub fn compare(&self, scores: &ResolvedScores, a: &Model, b: &Model, column: &ColumnKey) -> Ordering {
        compare_entries(
            (self.value(scores, a, column), a.id()),
            (self.value(scores, b, column), b.id()),
        )
    }
}

/// Rank every column among the visible models.
///
/// Score columns keep only models with a value; tasks won is derived from
/// first places on task columns and ranks every visible model.
pub fn resolve_ranks(
    models: &[Model],
    groups: &ColumnGroups,
    scores: &ResolvedScores,
    metric: &str,
    visibility: &Visibility,
) -> Ranking {
    let visible = visibility.apply(models);
    let mut ranking = Ranking {
        metric: metric.to_string(),
        ..Default::default()
    };

    for column in groups.score_columns() {
        let mut entries: Vec<(Option<f64>, &str)> = visible
            .iter()
            .map(|m| (scores.value(m, &column, metric), m.id()))
            .collect();
        entries.sort_by(|a, b| compare_entries(*a, *b));
        let ranked = entries
            .into_iter()
            .filter(|(value, _)| value.is_some())
            .map(|(_, id)| id.to_string())
            .collect();
        ranking.ranks.insert(column, ranked);
    }

    for task in groups.tasks() {
        let column = ColumnKey::task(&task.id);
        if let Some(winner) = ranking.ranks(&column).first().cloned() {
            *ranking.tasks_won.entry(winner).or_insert(0) += 1;
        }
    }

    let mut by_wins: Vec<&Model> = visible.clone();
    by_wins.sort_by(|a, b| ranking.compare(scores, a, b, &ColumnKey::TasksWon));
    let won_ranks = by_wins.iter().map(|m| m.id().to_string()).collect();
    ranking.ranks.insert(ColumnKey::TasksWon, won_ranks);

    debug!(
        metric,
        visible = visible.len(),
        columns = ranking.ranks.len(),
        "Resolved ranks"
    );

    ranking
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::average::compute_averages;
    use crate::domain::column::GroupId;
    use crate::domain::document::{ModelResults, ScoreSheet, TaskDef, TaskGroupDef};
    use crate::domain::group::build_groups;
    use crate::domain::model::build_models;

    const METRIC: &str = "main_score";

    struct Fixture {
        models: Vec<Model>,
        groups: ColumnGroups,
        scores: ResolvedScores,
    }

    impl Fixture {
        fn new(models: Vec<Model>, tasks: &[&str]) -> Self {
            let defs = vec![TaskGroupDef::new("G")];
            let tasks: Vec<TaskDef> = tasks.iter().map(|t| TaskDef::new(*t).with_group("G")).collect();
            let groups = build_groups(&defs, &tasks, &BTreeSet::new());
            let scores = compute_averages(&models, &groups, &[METRIC.to_string()]);
            Self {
                models,
                groups,
                scores,
            }
        }

        fn rank(&self, visibility: &Visibility) -> Ranking {
            resolve_ranks(&self.models, &self.groups, &self.scores, METRIC, visibility)
        }
    }

    fn model(id: &str, scores: &[(&str, f64)]) -> Model {
        let sheet = scores
            .iter()
            .fold(ScoreSheet::new(), |sheet, (task, v)| sheet.with(*task, METRIC, *v));
        Model::new(id, sheet)
    }

    fn two_model_fixture() -> Fixture {
        Fixture::new(
            vec![
                model("M1", &[("A", 80.0), ("B", 60.0)]),
                model("M2", &[("A", 70.0), ("B", 90.0)]),
            ],
            &["A", "B"],
        )
    }

    #[test]
    fn test_global_average_ranking() {
        let fixture = two_model_fixture();
        let ranking = fixture.rank(&Visibility::all());

        assert_eq!(ranking.ranks(&ColumnKey::GlobalAverage), ["M2", "M1"]);
        assert_eq!(ranking.achievement(&ColumnKey::GlobalAverage, "M2"), Some(Achievement::Gold));
        assert_eq!(ranking.achievement(&ColumnKey::task("B"), "M2"), Some(Achievement::Gold));
        assert_eq!(ranking.achievement(&ColumnKey::task("A"), "M1"), Some(Achievement::Gold));
        assert_eq!(ranking.achievement(&ColumnKey::task("A"), "M2"), Some(Achievement::Silver));
    }

    #[test]
    fn test_tasks_won_tie_breaks_by_id() {
        let fixture = two_model_fixture();
        let ranking = fixture.rank(&Visibility::all());

        assert_eq!(ranking.tasks_won("M1"), 1);
        assert_eq!(ranking.tasks_won("M2"), 1);
        assert_eq!(ranking.ranks(&ColumnKey::TasksWon), ["M1", "M2"]);
        assert_eq!(ranking.achievement(&ColumnKey::TasksWon, "M1"), Some(Achievement::Gold));
    }

    #[test]
    fn test_missing_value_excludes_from_rank_list() {
        let mut models = two_model_fixture().models;
        models.push(model("M3", &[("A", 99.0)]));
        let fixture = Fixture::new(models, &["A", "B"]);
        let ranking = fixture.rank(&Visibility::all());

        assert_eq!(ranking.ranks(&ColumnKey::task("A")), ["M3", "M1", "M2"]);
        assert_eq!(ranking.ranks(&ColumnKey::task("B")), ["M2", "M1"]);
        assert_eq!(ranking.ranks(&ColumnKey::GlobalAverage), ["M2", "M1"]);
        assert_eq!(ranking.position(&ColumnKey::task("B"), "M3"), None);
        assert_eq!(ranking.ranks(&ColumnKey::TasksWon).len(), 3);
    }

    #[test]
    fn test_equal_values_tie_break_by_id() {
        let fixture = Fixture::new(
            vec![
                model("zeta", &[("A", 50.0)]),
                model("alpha", &[("A", 50.0)]),
                model("mid", &[("A", 75.0)]),
            ],
            &["A"],
        );
        let ranking = fixture.rank(&Visibility::all());

        assert_eq!(ranking.ranks(&ColumnKey::task("A")), ["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_zero_score_is_ranked() {
        let fixture = Fixture::new(
            vec![model("a", &[("A", 0.0)]), model("b", &[("A", 10.0)])],
            &["A"],
        );
        let ranking = fixture.rank(&Visibility::all());

        assert_eq!(ranking.ranks(&ColumnKey::task("A")), ["b", "a"]);
    }

    #[test]
    fn test_hidden_models_never_take_podium() {
        let mut models = two_model_fixture().models;
        models[1] = model("M2", &[("A", 70.0), ("B", 90.0)]).with_tags(["hidden"]);
        models[0] = models[0].clone().with_tags(["shown"]);
        let fixture = Fixture::new(models, &["A", "B"]);
        let visibility = Visibility::new(["shown".to_string()].into(), "");
        let ranking = fixture.rank(&visibility);

        assert_eq!(ranking.ranks(&ColumnKey::task("B")), ["M1"]);
        assert_eq!(ranking.achievement(&ColumnKey::task("B"), "M2"), None);
        assert_eq!(ranking.tasks_won("M1"), 2);
        assert_eq!(ranking.tasks_won("M2"), 0);
        assert_eq!(ranking.ranks(&ColumnKey::TasksWon), ["M1"]);
    }

    #[test]
    fn test_rank_lists_have_no_duplicates_and_are_sorted() {
        let fixture = Fixture::new(
            vec![
                model("a", &[("A", 3.0), ("B", 1.0)]),
                model("b", &[("A", 2.0), ("B", 2.0)]),
                model("c", &[("A", 2.0)]),
                model("d", &[("A", 9.0), ("B", 7.0)]),
            ],
            &["A", "B"],
        );
        let ranking = fixture.rank(&Visibility::all());

        for column in fixture.groups.score_columns() {
            let ranks = ranking.ranks(&column);
            let unique: BTreeSet<&String> = ranks.iter().collect();
            assert_eq!(unique.len(), ranks.len());

            let values: Vec<f64> = ranks
                .iter()
                .map(|id| {
                    let m = fixture.models.iter().find(|m| m.id() == id).unwrap();
                    fixture.scores.value(m, &column, METRIC).unwrap()
                })
                .collect();
            assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_repeated_result_ids_rank_once() {
        let results = vec![
            ModelResults::new("M", ScoreSheet::new().with("A", METRIC, 90.0)),
            ModelResults::new("M", ScoreSheet::new().with("A", METRIC, 10.0)),
            ModelResults::new("X", ScoreSheet::new().with("A", METRIC, 50.0)),
        ];
        let fixture = Fixture::new(build_models(&results, &[]), &["A"]);
        let ranking = fixture.rank(&Visibility::all());

        assert_eq!(ranking.ranks(&ColumnKey::task("A")), ["M", "X"]);
        assert_eq!(ranking.ranks(&ColumnKey::GlobalAverage), ["M", "X"]);
        assert_eq!(ranking.achievement(&ColumnKey::task("A"), "M"), Some(Achievement::Gold));
        assert_eq!(ranking.achievement(&ColumnKey::task("A"), "X"), Some(Achievement::Silver));
        let m = &fixture.models[0];
        assert_eq!(fixture.scores.value(m, &ColumnKey::GlobalAverage, METRIC), Some(90.0));
    }

    #[test]
    fn test_podium_positions_are_unique() {
        let fixture = Fixture::new(
            (0..6).map(|i| model(&format!("m{i}"), &[("A", i as f64)])).collect(),
            &["A"],
        );
        let ranking = fixture.rank(&Visibility::all());
        let column = ColumnKey::task("A");

        let badges: Vec<Achievement> = fixture
            .models
            .iter()
            .filter_map(|m| ranking.achievement(&column, m.id()))
            .collect();
        assert_eq!(badges.len(), 3);
        assert_eq!(ranking.achievement(&column, "m5"), Some(Achievement::Gold));
        assert_eq!(ranking.achievement(&column, "m4"), Some(Achievement::Silver));
        assert_eq!(ranking.achievement(&column, "m3"), Some(Achievement::Bronze));
    }

    #[test]
    fn test_group_average_columns_ranked() {
        let fixture = two_model_fixture();
        let ranking = fixture.rank(&Visibility::all());
        let group = ColumnKey::group_average(GroupId::declared("G"));

        assert_eq!(ranking.ranks(&group), ["M2", "M1"]);
        assert!(ranking.ranks(&ColumnKey::task("missing")).is_empty());
    }

    #[test]
    fn test_compare_entries_orders_missing_last() {
        assert_eq!(compare_entries((Some(1.0), "b"), (None, "a")), Ordering::Less);
        assert_eq!(compare_entries((None, "a"), (None, "b")), Ordering::Less);
        assert_eq!(compare_entries((Some(2.0), "z"), (Some(3.0), "a")), Ordering::Greater);
    }
}
