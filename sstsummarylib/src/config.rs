//! Runtime configuration read from the environment.
//!
//! The command line only carries `--schema`; everything else that varies
//! between deployments comes from environment variables.

use std::path::PathBuf;

/// Environment variable naming the metadata export file.
pub const METADATA_ENV: &str = "SSTSUMMARY_METADATA";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SSTSUMMARY_LOG";

/// Metadata export used when [`METADATA_ENV`] is unset.
pub const DEFAULT_METADATA_PATH: &str = "sstable-metadata.json";
/// Log filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON metadata export
    pub metadata_path: PathBuf,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata_path: PathBuf::from(DEFAULT_METADATA_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Unset and empty values use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            metadata_path: value(METADATA_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.metadata_path),
            log_filter: value(LOG_ENV).unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.metadata_path, PathBuf::from("sstable-metadata.json"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (METADATA_ENV, "/var/lib/export.json"),
            (LOG_ENV, "sstsummarylib=debug"),
        ]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.metadata_path, PathBuf::from("/var/lib/export.json"));
        assert_eq!(config.log_filter, "sstsummarylib=debug");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
