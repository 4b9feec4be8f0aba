//! Document repository trait

use async_trait::async_trait;

use crate::domain::{DomainError, EvalDocument};

#[cfg(test)]
use mockall::automock;

/// A place a leaderboard document can be fetched from
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Human-readable location, used in logs and error messages
    fn location(&self) -> String;

    /// Fetches and parses the whole document
    async fn fetch(&self) -> Result<EvalDocument, DomainError>;
}

/// Parse document text, tagging failures with where the text came from
pub(crate) fn parse_document(location: &str, text: &str) -> Result<EvalDocument, DomainError> {
    EvalDocument::from_json(text).map_err(|e| {
        DomainError::parse(format!("Invalid leaderboard document at {}: {}", location, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_reports_location() {
        let err = parse_document("data.json", "{not json").unwrap_err();

        assert!(matches!(err, DomainError::Parse { .. }));
        assert!(err.to_string().contains("data.json"));
    }

    #[test]
    fn test_parse_document_accepts_minimal_object() {
        let doc = parse_document("inline", "{}").unwrap();

        assert!(doc.results.is_empty());
        assert_eq!(doc.title, "");
    }
}
