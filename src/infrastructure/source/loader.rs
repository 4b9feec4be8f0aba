//! Document loader - turns a source into a dataset or a session

use std::sync::Arc;

use tracing::{info, warn};

use super::file::FileDocumentRepository;
use super::http::HttpDocumentRepository;
use super::repository::DocumentRepository;
use crate::domain::{Dataset, DomainError, Leaderboard};

/// Pick a repository for a source string: URLs go over HTTP, anything else is a path
pub fn repository_for(source: &str) -> Arc<dyn DocumentRepository> {
    if is_remote(source) {
        Arc::new(HttpDocumentRepository::new(source))
    } else {
        Arc::new(FileDocumentRepository::new(source))
    }
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads datasets from a document repository
#[derive(Clone)]
pub struct DocumentLoader {
    repository: Arc<dyn DocumentRepository>,
}

impl std::fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLoader")
            .field("location", &self.repository.location())
            .finish()
    }
}

impl DocumentLoader {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(repository_for(source))
    }

    pub fn location(&self) -> String {
        self.repository.location()
    }

    /// Fetch the document and build a dataset; nothing is kept on failure
    pub async fn load(&self) -> Result<Dataset, DomainError> {
        let document = self.repository.fetch().await?;
        let dataset = Dataset::new(document);
        info!(
            source = %self.repository.location(),
            models = dataset.models().len(),
            "Leaderboard document loaded"
        );
        Ok(dataset)
    }

    /// Start a session over a freshly loaded dataset
    pub async fn open(&self) -> Result<Leaderboard, DomainError> {
        Ok(Leaderboard::new(self.load().await?))
    }

    /// Reload into an existing session; the session is left untouched if loading fails
    pub async fn reload(&self, session: &mut Leaderboard) -> Result<(), DomainError> {
        match self.load().await {
            Ok(dataset) => {
                session.replace_dataset(dataset);
                Ok(())
            }
            Err(e) => {
                warn!(source = %self.repository.location(), error = %e, "Reload failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EvalDocument, ModelResults, ScoreSheet};
    use crate::infrastructure::source::repository::MockDocumentRepository;

    fn document(title: &str) -> EvalDocument {
        EvalDocument {
            title: title.to_string(),
            results: vec![ModelResults::new(
                "M1",
                ScoreSheet::new().with("A", "main_score", 50.0),
            )],
            ..Default::default()
        }
    }

    fn mock_returning(result: Result<EvalDocument, DomainError>) -> MockDocumentRepository {
        let mut mock = MockDocumentRepository::new();
        mock.expect_location().return_const("mock://data.json".to_string());
        mock.expect_fetch().times(1).return_once(move || result);
        mock
    }

    #[test]
    fn test_remote_detection() {
        assert!(is_remote("https://example.org/data.json"));
        assert!(is_remote("http://localhost:8080/data.json"));
        assert!(!is_remote("data.json"));
        assert!(!is_remote("./httpdocs/data.json"));
    }

    #[tokio::test]
    async fn test_load_builds_dataset() {
        let loader = DocumentLoader::new(Arc::new(mock_returning(Ok(document("Bench")))));

        let dataset = loader.load().await.unwrap();

        assert_eq!(dataset.document().title, "Bench");
        assert_eq!(dataset.models().len(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_yields_no_dataset() {
        let loader = DocumentLoader::new(Arc::new(mock_returning(Err(DomainError::source(
            "mock",
            "connection reset",
        )))));

        let result = loader.load().await;

        assert!(matches!(result, Err(DomainError::Source { .. })));
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_dataset() {
        let mut session = Leaderboard::new(Dataset::new(document("Old")));
        let loader = DocumentLoader::new(Arc::new(mock_returning(Err(DomainError::parse(
            "truncated",
        )))));

        assert!(loader.reload(&mut session).await.is_err());
        assert_eq!(session.dataset().document().title, "Old");
    }

    #[tokio::test]
    async fn test_successful_reload_replaces_dataset() {
        let mut session = Leaderboard::new(Dataset::new(EvalDocument::default()));
        let loader = DocumentLoader::new(Arc::new(mock_returning(Ok(document("New")))));

        loader.reload(&mut session).await.unwrap();

        assert_eq!(session.dataset().document().title, "New");
        assert_eq!(session.dataset().models().len(), 1);
    }
}
