//! YAML schema definitions.
//!
//! A schema lists keyspaces and their column families. When one is supplied
//! the source enumerates from it instead of discovering names from the
//! metadata export:
//!
//! ```yaml
//! keyspaces:
//!   - name: ks1
//!     tables: [cf1, cf2]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SummaryError;
use crate::Result;

/// A keyspace and the column families it contains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyspaceSchema {
    /// Keyspace name
    pub name: String,
    /// Column family names, in report order
    #[serde(default)]
    pub tables: Vec<String>,
}

/// Schema loaded from a YAML definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Keyspaces, in report order
    #[serde(default)]
    pub keyspaces: Vec<KeyspaceSchema>,
}

impl Schema {
    /// Load a schema from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SummaryError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<string>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let parse_error = |message: String| SummaryError::SchemaParse {
            path: PathBuf::from(path),
            message,
        };

        let schema: Schema =
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let mut seen = HashSet::new();
        for keyspace in &schema.keyspaces {
            if keyspace.name.is_empty() {
                return Err(parse_error("keyspace with an empty name".to_string()));
            }
            if keyspace.tables.iter().any(|t| t.is_empty()) {
                return Err(parse_error(format!(
                    "keyspace '{}' has a column family with an empty name",
                    keyspace.name
                )));
            }
            if !seen.insert(keyspace.name.as_str()) {
                return Err(parse_error(format!("duplicate keyspace '{}'", keyspace.name)));
            }
            let mut tables = HashSet::new();
            if let Some(table) = keyspace.tables.iter().find(|t| !tables.insert(t.as_str())) {
                return Err(parse_error(format!(
                    "duplicate column family '{}' in keyspace '{}'",
                    table, keyspace.name
                )));
            }
        }

        Ok(schema)
    }

    /// Keyspace names in declaration order.
    pub fn keyspace_names(&self) -> Vec<String> {
        self.keyspaces.iter().map(|k| k.name.clone()).collect()
    }

    /// Column families of a keyspace, or `None` if it is not declared.
    pub fn tables(&self, keyspace: &str) -> Option<&[String]> {
        self.keyspaces
            .iter()
            .find(|k| k.name == keyspace)
            .map(|k| k.tables.as_slice())
    }
}
