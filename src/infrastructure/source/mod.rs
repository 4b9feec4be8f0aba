//! Document sources - local files and HTTP

mod file;
mod http;
mod loader;
mod repository;

pub use file::FileDocumentRepository;
pub use http::HttpDocumentRepository;
pub use loader::{is_remote, repository_for, DocumentLoader};
pub use repository::DocumentRepository;
