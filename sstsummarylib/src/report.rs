//! Report assembly: walk every column family and build the summary table.
//!
//! The data flow is:
//! 1. MetadataSource (keyspaces, column families, SSTable records)
//! 2. TableSummary (one per column family)
//! 3. ReportRow (seven display strings)
//! 4. TextTable (rendered once every row is in)
//!
//! Any error aborts the whole report; nothing is rendered from a partial
//! walk.

use tracing::debug;

use crate::data::TableSummary;
use crate::output::{format_repair_coverage, format_timestamp, human_bytes, TextTable};
use crate::source::MetadataSource;
use crate::Result;

/// Column labels of the summary report.
pub const REPORT_HEADERS: [&str; 7] = [
    "Keyspace",
    "Column Family",
    "SSTables",
    "Disk Size",
    "Data Size",
    "Last Repaired",
    "Repair %",
];

/// One formatted line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub keyspace: String,
    pub column_family: String,
    pub sstables: String,
    pub disk_size: String,
    pub data_size: String,
    /// Empty when nothing is repaired
    pub last_repaired: String,
    /// Empty when nothing is repaired
    pub repair_coverage: String,
}

impl ReportRow {
    /// Cells in header order.
    pub fn into_cells(self) -> [String; 7] {
        [
            self.keyspace,
            self.column_family,
            self.sstables,
            self.disk_size,
            self.data_size,
            self.last_repaired,
            self.repair_coverage,
        ]
    }
}

impl From<&TableSummary> for ReportRow {
    fn from(summary: &TableSummary) -> Self {
        let last_repaired = summary
            .last_repaired_at
            .map(format_timestamp)
            .unwrap_or_default();
        let repair_coverage = summary
            .repaired_percent()
            .map(|percent| {
                format_repair_coverage(summary.repaired_count, summary.file_count, percent)
            })
            .unwrap_or_default();

        ReportRow {
            keyspace: summary.namespace.clone(),
            column_family: summary.table.clone(),
            sstables: summary.file_count.to_string(),
            disk_size: human_bytes(summary.disk_size),
            data_size: human_bytes(summary.data_size),
            last_repaired,
            repair_coverage,
        }
    }
}

/// Summarize every column family the source knows about, in enumeration
/// order.
pub fn collect_summaries<S>(source: &S) -> Result<Vec<TableSummary>>
where
    S: MetadataSource + ?Sized,
{
    let mut summaries = Vec::new();

    for keyspace in source.namespaces()? {
        for table in source.tables(&keyspace)? {
            let records = source.file_metadata(&keyspace, &table)?;
            let summary = TableSummary::from_records(keyspace.as_str(), table, &records);
            debug!(
                keyspace = %summary.namespace,
                table = %summary.table,
                sstables = summary.file_count,
                repaired = summary.repaired_count,
                "summarized column family"
            );
            summaries.push(summary);
        }
    }

    Ok(summaries)
}

/// Lay out summaries as a report table.
pub fn build_table(summaries: &[TableSummary]) -> Result<TextTable> {
    let mut table = TextTable::new();
    table.set_header(REPORT_HEADERS)?;
    for summary in summaries {
        table.add_row(ReportRow::from(summary).into_cells())?;
    }
    Ok(table)
}

/// Build the complete, rendered summary report for a source.
pub fn summary_report<S>(source: &S) -> Result<String>
where
    S: MetadataSource + ?Sized,
{
    let summaries = collect_summaries(source)?;
    Ok(build_table(&summaries)?.render())
}
