//! Ranking domain - column orderings and podium badges

mod achievement;
mod resolver;

pub use achievement::Achievement;
pub use resolver::{compare_entries, resolve_ranks, Ranking};
