//! Error types for sstsummarylib

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a [`SummaryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The schema document could not be read or parsed
    SchemaLoad,
    /// Enumerating namespaces/tables or fetching file metadata failed
    Backend,
    /// The table renderer was driven with an inconsistent layout
    ArityMismatch,
}

/// Errors that can occur while building a summary report
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Failed to read the schema document
    #[error("failed to read schema '{path}': {source}")]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema document is not valid YAML for the expected shape
    #[error("failed to parse schema '{path}': {message}")]
    SchemaParse { path: PathBuf, message: String },

    /// Failed to read the metadata export
    #[error("failed to read metadata export '{path}': {source}")]
    MetadataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The metadata export is not valid JSON for the expected shape
    #[error("failed to parse metadata export '{path}': {message}")]
    MetadataParse { path: PathBuf, message: String },

    /// A table listing was requested for a namespace the source does not know
    #[error("unknown keyspace: {0}")]
    UnknownNamespace(String),

    /// Any other failure reported by a metadata source
    #[error("metadata source error: {0}")]
    Backend(String),

    /// A row was added whose width differs from the header's
    #[error("row has {found} columns but the header has {expected}")]
    ArityMismatch { expected: usize, found: usize },

    /// A row was added before the header was set
    #[error("row added before the header was set")]
    MissingHeader,

    /// The header was set twice, or after rows were added
    #[error("table header can only be set once, before any row")]
    HeaderAlreadySet,
}

impl SummaryError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummaryError::SchemaRead { .. } | SummaryError::SchemaParse { .. } => {
                ErrorKind::SchemaLoad
            }
            SummaryError::MetadataRead { .. }
            | SummaryError::MetadataParse { .. }
            | SummaryError::UnknownNamespace(_)
            | SummaryError::Backend(_) => ErrorKind::Backend,
            SummaryError::ArityMismatch { .. }
            | SummaryError::MissingHeader
            | SummaryError::HeaderAlreadySet => ErrorKind::ArityMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let err = SummaryError::SchemaParse {
            path: PathBuf::from("schema.yaml"),
            message: "bad".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::SchemaLoad);
        assert_eq!(
            SummaryError::UnknownNamespace("ks".to_string()).kind(),
            ErrorKind::Backend
        );
        assert_eq!(
            SummaryError::ArityMismatch {
                expected: 7,
                found: 6
            }
            .kind(),
            ErrorKind::ArityMismatch
        );
    }

    #[test]
    fn test_display_includes_path() {
        let err = SummaryError::MetadataRead {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
