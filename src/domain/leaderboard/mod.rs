//! Leaderboard domain - datasets, the resolve pipeline and sessions

mod dataset;
mod session;

pub use dataset::{Dataset, DEFAULT_METRIC};
pub use session::{resolve, Leaderboard, SessionStats};
