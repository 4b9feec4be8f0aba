//! Evaluation leaderboard
//!
//! Ranks models across the tasks of a benchmark:
//! - Group and global averages per scoring metric
//! - Per-column rankings with podium badges and a tasks-won tally
//! - Tag facets and free-text model filtering
//! - A resolved cell grid for rendering, plus CSV and HTML export

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{resolve, Dataset, DomainError, Leaderboard, ResolvedView, ViewState};
