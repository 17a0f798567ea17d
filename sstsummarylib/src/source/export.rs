//! Metadata source backed by a JSON export.
//!
//! The export is produced by an external collector that reads SSTable
//! statistics on the storage nodes. It lists keyspaces, their column
//! families, and one entry per SSTable:
//!
//! ```json
//! { "keyspaces": [ { "name": "ks1", "tables": [ { "name": "cf1",
//!   "sstables": [ { "disk_length": 100, "uncompressed_length": 200,
//!                   "repaired_at": 1000 } ] } ] } ] }
//! ```
//!
//! A `repaired_at` of `0` (or none at all) marks an unrepaired SSTable,
//! unless `is_repaired` is given explicitly.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SummaryError;
use crate::Result;

use super::schema::Schema;
use super::{FileMetadata, MetadataSource};

/// Repair timestamp used by the storage engine for never-repaired SSTables.
pub const UNREPAIRED_SSTABLE: i64 = 0;

/// One SSTable entry in the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SSTableExport {
    /// Bytes on disk across all components
    pub disk_length: u64,
    /// Uncompressed data length
    pub uncompressed_length: u64,
    /// Repair time in epoch millis, `0` when unrepaired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repaired_at: Option<i64>,
    /// Explicit repair flag, overriding the `repaired_at` convention
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_repaired: Option<bool>,
}

impl SSTableExport {
    /// Convert to a [`FileMetadata`] record.
    pub fn to_metadata(&self) -> FileMetadata {
        let repaired_at = self.repaired_at.unwrap_or(UNREPAIRED_SSTABLE);
        let is_repaired = self
            .is_repaired
            .unwrap_or(repaired_at != UNREPAIRED_SSTABLE);

        FileMetadata {
            disk_length: self.disk_length,
            uncompressed_length: self.uncompressed_length,
            is_repaired,
            repaired_at,
        }
    }
}

/// A column family and its SSTables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableExport {
    /// Column family name
    pub name: String,
    /// SSTables of this column family
    #[serde(default)]
    pub sstables: Vec<SSTableExport>,
}

/// A keyspace and its column families.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyspaceExport {
    /// Keyspace name
    pub name: String,
    /// Column families, in export order
    #[serde(default)]
    pub tables: Vec<TableExport>,
}

/// The whole metadata export document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataExport {
    /// Keyspaces, in export order
    #[serde(default)]
    pub keyspaces: Vec<KeyspaceExport>,
}

impl MetadataExport {
    /// Load an export from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SummaryError::MetadataRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_error = |message: String| SummaryError::MetadataParse {
            path: path.to_path_buf(),
            message,
        };

        let export: MetadataExport =
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
        export.check_unique_names().map_err(parse_error)?;
        Ok(export)
    }

    /// Reject repeated keyspace names, and repeated column family names
    /// within a keyspace.
    pub fn check_unique_names(&self) -> std::result::Result<(), String> {
        let mut keyspaces = HashSet::new();
        for keyspace in &self.keyspaces {
            if !keyspaces.insert(keyspace.name.as_str()) {
                return Err(format!("duplicate keyspace '{}'", keyspace.name));
            }
            let mut tables = HashSet::new();
            for table in &keyspace.tables {
                if !tables.insert(table.name.as_str()) {
                    return Err(format!(
                        "duplicate column family '{}' in keyspace '{}'",
                        table.name, keyspace.name
                    ));
                }
            }
        }
        Ok(())
    }

    fn keyspace(&self, name: &str) -> Option<&KeyspaceExport> {
        self.keyspaces.iter().find(|k| k.name == name)
    }

    fn table(&self, keyspace: &str, table: &str) -> Option<&TableExport> {
        self.keyspace(keyspace)
            .and_then(|k| k.tables.iter().find(|t| t.name == table))
    }
}

/// [`MetadataSource`] over a [`MetadataExport`].
///
/// Without a schema, keyspaces and column families are discovered from the
/// export itself. With a schema, enumeration follows the schema and column
/// families absent from the export have no SSTables.
#[derive(Debug, Clone)]
pub struct ExportSource {
    export: MetadataExport,
    schema: Option<Schema>,
}

impl ExportSource {
    /// Source discovering names from the export.
    pub fn new(export: MetadataExport) -> Self {
        Self {
            export,
            schema: None,
        }
    }

    /// Source enumerating names from `schema`.
    pub fn with_schema(export: MetadataExport, schema: Schema) -> Self {
        Self {
            export,
            schema: Some(schema),
        }
    }
}

impl MetadataSource for ExportSource {
    fn namespaces(&self) -> Result<Vec<String>> {
        Ok(match &self.schema {
            Some(schema) => schema.keyspace_names(),
            None => self.export.keyspaces.iter().map(|k| k.name.clone()).collect(),
        })
    }

    fn tables(&self, namespace: &str) -> Result<Vec<String>> {
        match &self.schema {
            Some(schema) => schema
                .tables(namespace)
                .map(|tables| tables.to_vec())
                .ok_or_else(|| SummaryError::UnknownNamespace(namespace.to_string())),
            None => self
                .export
                .keyspace(namespace)
                .map(|k| k.tables.iter().map(|t| t.name.clone()).collect())
                .ok_or_else(|| SummaryError::UnknownNamespace(namespace.to_string())),
        }
    }

    fn file_metadata(&self, namespace: &str, table: &str) -> Result<Vec<FileMetadata>> {
        if self.schema.is_none() && self.export.keyspace(namespace).is_none() {
            return Err(SummaryError::UnknownNamespace(namespace.to_string()));
        }
        let Some(entry) = self.export.table(namespace, table) else {
            return Ok(Vec::new());
        };

        Ok(entry
            .sstables
            .iter()
            .map(|sstable| {
                let metadata = sstable.to_metadata();
                if metadata.is_repaired && metadata.repaired_at == UNREPAIRED_SSTABLE {
                    warn!(
                        keyspace = namespace,
                        table, "SSTable marked repaired without a repair timestamp"
                    );
                }
                metadata
            })
            .collect())
    }
}
