//! Infrastructure layer - document sources, export writers, preparation and logging

pub mod export;
pub mod logging;
pub mod prepare;
pub mod source;

pub use export::write_export;
pub use source::{repository_for, DocumentLoader, DocumentRepository};
