//! # sstsummarylib
//!
//! Per-table summaries of SSTable sizes and repair coverage.
//!
//! ## Overview
//!
//! For every keyspace and column family a metadata source knows about, this
//! library folds the metadata of each SSTable into a [`TableSummary`]:
//!
//! - **SSTables**: number of data files
//! - **Disk Size**: bytes on disk
//! - **Data Size**: uncompressed bytes
//! - **Last Repaired**: latest repair time among repaired SSTables
//! - **Repair %**: repaired files out of all files, and the share of
//!   uncompressed data they hold
//!
//! Summaries are then laid out as an aligned text table.
//!
//! ## Pipeline
//!
//! 1. [`source`]: enumerate keyspaces, column families and SSTable records
//! 2. [`data`]: aggregate records into summaries
//! 3. [`output`]: format cells and render the table
//! 4. [`report`]: drive the three stages above
//!
//! ## Example
//!
//! ```rust
//! use sstsummarylib::{summary_report, ExportSource, MetadataExport};
//!
//! let export: MetadataExport = serde_json::from_str(r#"{
//!     "keyspaces": [{"name": "ks1", "tables": [{"name": "cf1", "sstables": [
//!         {"disk_length": 100, "uncompressed_length": 200, "repaired_at": 1000},
//!         {"disk_length": 50, "uncompressed_length": 100}
//!     ]}]}]
//! }"#).unwrap();
//!
//! let report = summary_report(&ExportSource::new(export)).unwrap();
//! assert!(report.contains("1/2 66%"));
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod report;
pub mod source;

pub use config::Config;
pub use data::TableSummary;
pub use error::{ErrorKind, SummaryError};
pub use output::TextTable;
pub use report::{build_table, collect_summaries, summary_report, ReportRow, REPORT_HEADERS};
pub use source::{
    open_source, ExportSource, FileMetadata, MetadataExport, MetadataSource, Schema,
    SourceOptions,
};

/// Result type for sstsummarylib operations
pub type Result<T> = std::result::Result<T, SummaryError>;
