//! Aggregation: fold SSTable records into per-table statistics.
//!
//! This module handles the second stage of the pipeline - turning the raw
//! records a [`crate::source::MetadataSource`] returns for one column family
//! into a single [`TableSummary`].
//!
//! ## Example
//!
//! ```rust
//! use sstsummarylib::{FileMetadata, TableSummary};
//!
//! let records = [
//!     FileMetadata::repaired(100, 200, 1000),
//!     FileMetadata::unrepaired(50, 100),
//! ];
//! let summary = TableSummary::from_records("ks1", "cf1", &records);
//! assert_eq!(summary.file_count, 2);
//! assert_eq!(summary.repaired_percent(), Some(66));
//! ```

pub mod summary;

pub use summary::TableSummary;
