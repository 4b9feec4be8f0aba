//! Local file document source

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::repository::{parse_document, DocumentRepository};
use crate::domain::{DomainError, EvalDocument};

/// Reads the document from a path on disk
#[derive(Debug, Clone)]
pub struct FileDocumentRepository {
    path: PathBuf,
}

impl FileDocumentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<EvalDocument, DomainError> {
        let location = self.location();
        debug!(path = %location, "Reading leaderboard document");

        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DomainError::not_found(format!("Leaderboard document not found: {}", location))
            } else {
                DomainError::source(&location, e.to_string())
            }
        })?;

        parse_document(&location, &text)
    }
}
