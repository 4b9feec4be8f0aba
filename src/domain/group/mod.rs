//! Group domain - task groups resolved for the current view

mod builder;

pub use builder::{build_groups, ColumnGroup, ColumnGroups};
