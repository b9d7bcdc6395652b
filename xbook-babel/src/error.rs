//! Error types for book conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a book
///
/// Structural violations are fatal: a single failing chapter aborts the whole
/// conversion. Unresolved link fragments and unparsable image sources are not
/// errors at all; they degrade to document-only links and placeholder images.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A required container (body, main content div, navigation list) is absent
    #[error("Required element not found: {0}")]
    MissingElement(String),
    /// A tag appeared where a strict structural contract applies
    #[error("Unexpected tag <{tag}> in {context}")]
    UnexpectedTag { tag: String, context: String },
    /// A selector string could not be parsed
    #[error("Invalid selector: {0}")]
    Selector(String),
    /// The package manifest is malformed or incomplete
    #[error("Manifest error: {0}")]
    Manifest(String),
    /// Reading or writing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
}

impl ConvertError {
    pub(crate) fn unexpected(tag: impl Into<String>, context: impl Into<String>) -> Self {
        ConvertError::UnexpectedTag {
            tag: tag.into(),
            context: context.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
