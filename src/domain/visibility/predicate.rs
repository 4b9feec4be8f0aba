//! Visibility predicate shared by row rendering and ranking

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::model::Model;

/// Anything that is not a letter or a digit separates query tokens
static TOKEN_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\d]+").unwrap());

/// Split a free-text query into lower-cased tokens
pub fn tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    TOKEN_SEPARATOR
        .split(&lowered)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Which models currently participate in rendering and ranking
///
/// A model passes when it carries at least one active tag (if any tag is
/// active) and its lower-cased display name contains every query token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Visibility {
    tags: BTreeSet<String>,
    tokens: Vec<String>,
}

impl Visibility {
    pub fn new(tags: BTreeSet<String>, query: &str) -> Self {
        Self {
            tags,
            tokens: tokenize(query),
        }
    }

    /// Predicate that admits every model
    pub fn all() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn is_unrestricted(&self) -> bool {
        self.tags.is_empty() && self.tokens.is_empty()
    }

    pub fn admits(&self, model: &Model) -> bool {
        if !self.tags.is_empty() && !model.tags().iter().any(|tag| self.tags.contains(tag)) {
            return false;
        }
        if self.tokens.is_empty() {
            return true;
        }
        let name = model.display_name().to_lowercase();
        self.tokens.iter().all(|token| name.contains(token.as_str()))
    }

    /// Visible models, preserving input order
    pub fn apply<'a>(&self, models: &'a [Model]) -> Vec<&'a Model> {
        models.iter().filter(|m| self.admits(m)).collect()
    }
}
