//! Document domain - the leaderboard input snapshot

mod entity;
mod scores;

pub use entity::{
    DocumentOptions, EvalDocument, FilterDef, FilterOption, MetricDef, ModelDef, ModelResults,
    TaskDef, TaskGroupDef,
};
pub use scores::{MetricScores, ScoreSheet};
