//! Filter facet selection

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::document::FilterDef;

/// Tag value that clears a facet
pub const NO_FILTER_TAG: &str = "none";

/// Selected option per facet; at most one tag per facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSelection {
    selected: BTreeMap<String, String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial selection: the first option of every facet that has one
    pub fn defaults(filters: &[FilterDef]) -> Self {
        let mut selection = Self::new();
        for filter in filters {
            if let Some(first) = filter.options.first() {
                selection.select(&filter.name, &first.tag);
            }
        }
        selection
    }

    /// Select a tag for a facet; the `none` tag clears the facet
    pub fn select(&mut self, facet: &str, tag: &str) {
        if tag.is_empty() || tag == NO_FILTER_TAG {
            self.selected.remove(facet);
        } else {
            self.selected.insert(facet.to_string(), tag.to_string());
        }
    }

    pub fn selected(&self, facet: &str) -> Option<&str> {
        self.selected.get(facet).map(String::as_str)
    }

    /// Union of the selected tags across facets
    pub fn active_tags(&self) -> BTreeSet<String> {
        self.selected.values().cloned().collect()
    }
}
