//! Per-table summary statistics.
//!
//! A `TableSummary` folds every SSTable of one column family into counts and
//! byte totals. The fold is commutative: the same records in any order give
//! the same summary.

use crate::source::FileMetadata;

/// Aggregated statistics for one keyspace/column family pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Keyspace name
    pub namespace: String,
    /// Column family name
    pub table: String,
    /// Number of SSTables folded
    pub file_count: u64,
    /// Sum of on-disk lengths
    pub disk_size: u64,
    /// Sum of uncompressed lengths
    pub data_size: u64,
    /// Number of repaired SSTables
    pub repaired_count: u64,
    /// Latest repair time among repaired SSTables (epoch millis)
    pub last_repaired_at: Option<i64>,
    /// Sum of uncompressed lengths of repaired SSTables
    pub repaired_data_size: u64,
}

impl TableSummary {
    /// Create an empty summary.
    pub fn new(namespace: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            table: table.into(),
            ..Default::default()
        }
    }

    /// Summarize a sequence of SSTable records.
    pub fn from_records<'a, I>(
        namespace: impl Into<String>,
        table: impl Into<String>,
        records: I,
    ) -> Self
    where
        I: IntoIterator<Item = &'a FileMetadata>,
    {
        let mut summary = Self::new(namespace, table);
        for record in records {
            summary.add_file(record);
        }
        summary
    }

    /// Fold one SSTable into this summary.
    pub fn add_file(&mut self, record: &FileMetadata) {
        self.file_count += 1;
        self.disk_size = self.disk_size.saturating_add(record.disk_length);
        self.data_size = self.data_size.saturating_add(record.uncompressed_length);

        if record.is_repaired {
            self.repaired_count += 1;
            self.last_repaired_at = Some(match self.last_repaired_at {
                Some(last) => last.max(record.repaired_at),
                None => record.repaired_at,
            });
            self.repaired_data_size = self
                .repaired_data_size
                .saturating_add(record.uncompressed_length);
        }
    }

    /// Whether any SSTable has been repaired.
    pub fn has_repairs(&self) -> bool {
        self.repaired_count > 0
    }

    /// Share of data (by uncompressed size) that is repaired, floored to a
    /// whole percent. `None` when nothing is repaired; `Some(0)` when the
    /// table holds no data.
    pub fn repaired_percent(&self) -> Option<u64> {
        if !self.has_repairs() {
            return None;
        }
        if self.data_size == 0 {
            return Some(0);
        }
        let percent = u128::from(self.repaired_data_size) * 100 / u128::from(self.data_size);
        Some(percent as u64)
    }
}
