//! View state - everything the user can change without reloading data

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::column::{ColumnKey, GroupId};
use crate::domain::visibility::{FilterSelection, Visibility};

/// Display state of one column group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupState {
    /// Only the group average is shown
    #[default]
    Collapsed,
    /// Group average followed by every task column
    Expanded,
    /// Removed from every computation
    Closed,
}

/// Interactive state of a leaderboard view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    /// Scoring metric; `None` selects the dataset default
    pub metric: Option<String>,
    /// Column the rows are ordered by
    pub sort: ColumnKey,
    /// Free-text model filter
    pub query: String,
    /// Selected filter facet options
    pub filters: FilterSelection,
    groups: BTreeMap<GroupId, GroupState>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            metric: None,
            sort: ColumnKey::GlobalAverage,
            query: String::new(),
            filters: FilterSelection::default(),
            groups: BTreeMap::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    pub fn with_sort(mut self, sort: ColumnKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_filters(mut self, filters: FilterSelection) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_group_state(mut self, group: GroupId, state: GroupState) -> Self {
        self.set_group_state(group, state);
        self
    }

    pub fn group_state(&self, group: &GroupId) -> GroupState {
        self.groups.get(group).copied().unwrap_or_default()
    }

    /// Set a group's state. The global group cannot be closed; closing it
    /// is ignored.
    pub fn set_group_state(&mut self, group: GroupId, state: GroupState) {
        if group.is_global() && state == GroupState::Closed {
            return;
        }
        self.groups.insert(group, state);
    }

    pub fn is_expanded(&self, group: &GroupId) -> bool {
        self.group_state(group) == GroupState::Expanded
    }

    pub fn is_closed(&self, group: &GroupId) -> bool {
        self.group_state(group) == GroupState::Closed
    }

    /// Flip between collapsed and expanded; closed groups stay closed
    pub fn toggle_expansion(&mut self, group: GroupId) {
        let next = match self.group_state(&group) {
            GroupState::Collapsed => GroupState::Expanded,
            GroupState::Expanded => GroupState::Collapsed,
            GroupState::Closed => return,
        };
        self.set_group_state(group, next);
    }

    /// Close an open group or reopen a closed one (collapsed)
    pub fn toggle_closed(&mut self, group: GroupId) {
        let next = match self.group_state(&group) {
            GroupState::Closed => GroupState::Collapsed,
            GroupState::Collapsed | GroupState::Expanded => GroupState::Closed,
        };
        self.set_group_state(group, next);
    }

    /// Ids of closed declared groups
    pub fn closed_groups(&self) -> BTreeSet<String> {
        self.groups
            .iter()
            .filter(|(_, state)| **state == GroupState::Closed)
            .filter_map(|(group, _)| match group {
                GroupId::Declared(id) => Some(id.clone()),
                GroupId::Global => None,
            })
            .collect()
    }

    /// Visibility predicate for the current tags and query
    pub fn visibility(&self) -> Visibility {
        Visibility::new(self.filters.active_tags(), &self.query)
    }
}
