//! Leaderboard resolution - the pure pipeline and its memoizing session

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::dataset::Dataset;
use crate::domain::average::{compute_averages, ResolvedScores};
use crate::domain::group::ColumnGroups;
use crate::domain::ranking::{resolve_ranks, Ranking};
use crate::domain::view::{Projection, ResolvedView, ViewState};
use crate::domain::visibility::Visibility;

/// Groups and averages for one closed-group set
#[derive(Debug, Clone)]
struct ColumnStage {
    closed: BTreeSet<String>,
    groups: ColumnGroups,
    scores: ResolvedScores,
}

impl ColumnStage {
    fn build(dataset: &Dataset, closed: BTreeSet<String>) -> Self {
        let groups = dataset.groups(&closed);
        let scores = compute_averages(dataset.models(), &groups, dataset.metric_ids());
        Self {
            closed,
            groups,
            scores,
        }
    }
}

/// Rankings for one metric and one visible model set
#[derive(Debug, Clone)]
struct RankStage {
    metric: String,
    visibility: Visibility,
    ranking: Ranking,
}

impl RankStage {
    fn build(dataset: &Dataset, columns: &ColumnStage, metric: String, visibility: Visibility) -> Self {
        let ranking = resolve_ranks(
            dataset.models(),
            &columns.groups,
            &columns.scores,
            &metric,
            &visibility,
        );
        Self {
            metric,
            visibility,
            ranking,
        }
    }

    fn matches(&self, metric: &str, visibility: &Visibility) -> bool {
        self.metric == metric && &self.visibility == visibility
    }
}

fn project(dataset: &Dataset, columns: &ColumnStage, ranks: &RankStage, state: &ViewState) -> ResolvedView {
    Projection {
        models: dataset.models(),
        groups: &columns.groups,
        scores: &columns.scores,
        ranking: &ranks.ranking,
        visibility: &ranks.visibility,
        state,
    }
    .project()
}

/// Resolve a view from scratch. Pure: the same inputs always give the same
/// view, and nothing is cached between calls.
pub fn resolve(dataset: &Dataset, state: &ViewState) -> ResolvedView {
    let columns = ColumnStage::build(dataset, state.closed_groups());
    let metric = dataset.resolve_metric(state.metric.as_deref());
    let ranks = RankStage::build(dataset, &columns, metric, state.visibility());
    project(dataset, &columns, &ranks, state)
}

/// How often each stage was rebuilt by a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub column_builds: usize,
    pub rank_builds: usize,
    pub projections: usize,
}

/// A dataset plus memoized stages.
///
/// Group/average work is redone only when the closed-group set changes and
/// ranking only when columns, metric or visibility change; sorting and
/// expanding groups just re-project. Views always equal [`resolve`].
#[derive(Debug, Clone)]
pub struct Leaderboard {
    dataset: Dataset,
    columns: Option<ColumnStage>,
    ranks: Option<RankStage>,
    stats: SessionStats,
}

impl Leaderboard {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            columns: None,
            ranks: None,
            stats: SessionStats::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Swap in a freshly loaded dataset, dropping every cached stage
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.columns = None;
        self.ranks = None;
    }

    /// Resolve the view for a state, reusing whatever stages still apply
    pub fn view(&mut self, state: &ViewState) -> ResolvedView {
        let closed = state.closed_groups();
        let columns = match self.columns.take() {
            Some(stage) if stage.closed == closed => {
                trace!("Reusing column stage");
                stage
            }
            _ => {
                debug!(closed = closed.len(), "Rebuilding column stage");
                self.ranks = None;
                self.stats.column_builds += 1;
                ColumnStage::build(&self.dataset, closed)
            }
        };

        let metric = self.dataset.resolve_metric(state.metric.as_deref());
        let visibility = state.visibility();
        let ranks = match self.ranks.take() {
            Some(stage) if stage.matches(&metric, &visibility) => {
                trace!("Reusing rank stage");
                stage
            }
            _ => {
                debug!(metric = %metric, "Rebuilding rank stage");
                self.stats.rank_builds += 1;
                RankStage::build(&self.dataset, &columns, metric, visibility)
            }
        };

        let view = project(&self.dataset, &columns, &ranks, state);
        self.stats.projections += 1;
        self.columns = Some(columns);
        self.ranks = Some(ranks);
        view
    }
}
