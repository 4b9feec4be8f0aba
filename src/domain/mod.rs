//! Domain layer - Core leaderboard logic and entities

pub mod average;
pub mod column;
pub mod document;
pub mod error;
pub mod group;
pub mod leaderboard;
pub mod model;
pub mod ranking;
pub mod view;
pub mod visibility;

pub use average::{compute_averages, ResolvedScores};
pub use column::{ColumnKey, GroupId, GLOBAL_AVERAGE_KEY, GLOBAL_GROUP_ID, TASKS_WON_KEY};
pub use document::{
    DocumentOptions, EvalDocument, FilterDef, FilterOption, MetricDef, MetricScores, ModelDef,
    ModelResults, ScoreSheet, TaskDef, TaskGroupDef,
};
pub use error::DomainError;
pub use group::{build_groups, ColumnGroup, ColumnGroups};
pub use leaderboard::{resolve, Dataset, Leaderboard, SessionStats, DEFAULT_METRIC};
pub use model::{build_models, Model};
pub use ranking::{resolve_ranks, Achievement, Ranking};
pub use view::{
    format_score, Cell, CellKind, ExportFormat, ExportMatrix, ExportValue, GroupState,
    Projection, ResolvedView, ViewState, EXPORT_FILE_STEM,
};
pub use visibility::{tokenize, FilterSelection, Visibility, NO_FILTER_TAG};
