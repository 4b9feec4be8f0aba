//! Visibility domain - tag facets and free-text filtering of models

mod predicate;
mod selection;

pub use predicate::{tokenize, Visibility};
pub use selection::{FilterSelection, NO_FILTER_TAG};
