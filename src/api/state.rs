//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::{Dataset, EvalDocument};

/// Loaded once at startup; handlers only read it
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub source: String,
}

impl AppState {
    pub fn new(dataset: Dataset, source: impl Into<String>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            source: source.into(),
        }
    }

    pub fn document(&self) -> &EvalDocument {
        self.dataset.document()
    }
}
