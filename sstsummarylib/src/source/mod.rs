//! Metadata sources: where per-SSTable records come from.
//!
//! This module handles the first stage of the pipeline - enumerating
//! keyspaces and column families and fetching the metadata of every
//! SSTable in a column family. It provides:
//!
//! - **MetadataSource**: the trait the report driver consumes
//! - **ExportSource**: a source backed by a JSON metadata export
//! - **Schema**: an optional YAML schema that replaces discovery
//!
//! ## Example
//!
//! ```rust,ignore
//! use sstsummarylib::source::{open_source, SourceOptions};
//!
//! let source = open_source(&SourceOptions::new().metadata_path("sstables.json"))?;
//! for keyspace in source.namespaces()? {
//!     println!("{keyspace}");
//! }
//! ```

pub mod export;
pub mod schema;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Result;

pub use export::{ExportSource, KeyspaceExport, MetadataExport, SSTableExport, TableExport};
pub use schema::{KeyspaceSchema, Schema};

/// Metadata of a single stored data file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Bytes occupied on disk
    pub disk_length: u64,
    /// Logical size of the decoded content
    pub uncompressed_length: u64,
    /// Whether the file has been reconciled against replicas
    pub is_repaired: bool,
    /// Repair time in epoch milliseconds, meaningful only when repaired
    pub repaired_at: i64,
}

impl FileMetadata {
    /// Metadata for a file that has never been repaired.
    pub fn unrepaired(disk_length: u64, uncompressed_length: u64) -> Self {
        Self {
            disk_length,
            uncompressed_length,
            is_repaired: false,
            repaired_at: 0,
        }
    }

    /// Metadata for a file repaired at `repaired_at` (epoch millis).
    pub fn repaired(disk_length: u64, uncompressed_length: u64, repaired_at: i64) -> Self {
        Self {
            disk_length,
            uncompressed_length,
            is_repaired: true,
            repaired_at,
        }
    }
}

/// Read access to keyspaces, column families and SSTable metadata.
///
/// Every call returns a fresh enumeration. Implementations report failures
/// as [`crate::SummaryError`] values; callers do not retry.
pub trait MetadataSource {
    /// List keyspace names.
    fn namespaces(&self) -> Result<Vec<String>>;

    /// List column family names in a keyspace.
    fn tables(&self, namespace: &str) -> Result<Vec<String>>;

    /// Fetch metadata for every SSTable of a column family.
    fn file_metadata(&self, namespace: &str, table: &str) -> Result<Vec<FileMetadata>>;
}

/// Options for opening a metadata source.
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Path of the JSON metadata export
    pub metadata_path: PathBuf,
    /// Schema replacing discovery, if any
    pub schema: Option<Schema>,
}

impl SourceOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metadata export path.
    pub fn metadata_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata_path = path.into();
        self
    }

    /// Enumerate keyspaces and column families from a schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Open the metadata source described by `options`.
pub fn open_source(options: &SourceOptions) -> Result<ExportSource> {
    let export = MetadataExport::load(&options.metadata_path)?;
    info!(
        path = %options.metadata_path.display(),
        keyspaces = export.keyspaces.len(),
        schema = options.schema.is_some(),
        "opened metadata export"
    );

    Ok(match &options.schema {
        Some(schema) => ExportSource::with_schema(export, schema.clone()),
        None => ExportSource::new(export),
    })
}
