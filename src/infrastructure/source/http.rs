//! HTTP document source

use async_trait::async_trait;
use tracing::debug;

use super::repository::{parse_document, DocumentRepository};
use crate::domain::{DomainError, EvalDocument};

/// Fetches the document with a single GET request
#[derive(Debug, Clone)]
pub struct HttpDocumentRepository {
    url: String,
    http_client: reqwest::Client,
}

impl HttpDocumentRepository {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl DocumentRepository for HttpDocumentRepository {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<EvalDocument, DomainError> {
        debug!(url = %self.url, "Fetching leaderboard document");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::source(&self.url, format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::not_found(format!(
                "Leaderboard document not found: {}",
                self.url
            )));
        }
        if !status.is_success() {
            return Err(DomainError::source(
                &self.url,
                format!("Server returned error status: {}", status),
            ));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::source(&self.url, format!("Failed to read body: {}", e)))?;

        parse_document(&self.url, &text)
    }
}
