//! Output formatting: present summaries as an aligned text table.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **TextTable**: header + rows of display strings, rendered with
//!   per-column alignment
//! - **format**: byte count, timestamp and repair coverage formatting
//!
//! The table performs no computation on its cells; everything it prints was
//! formatted by the caller.

pub mod format;
pub mod table;

pub use format::{format_repair_coverage, format_timestamp, human_bytes};
pub use table::TextTable;
