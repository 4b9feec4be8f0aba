//! Average domain - group and global means derived from raw scores

mod compute;

pub use compute::{compute_averages, ResolvedScores};
