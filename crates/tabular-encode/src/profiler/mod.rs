//! Column profiling.
//!
//! This module provides:
//! - Per-column statistics ([`ColumnStats`])
//! - Categorical dictionaries ([`WordCount`])
//! - Whole-table aggregation ([`TableInfo`])

mod statistics;
mod word_count;

pub use statistics::ColumnStats;
pub use word_count::WordCount;

use crate::table::Table;
use crate::types::{ColumnKind, ColumnSummary, TableProfile};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Statistics for every column of a table, computed eagerly.
///
/// A `TableInfo` describes the table as it was when built; rebuild it after
/// the table changes.
#[derive(Debug, Clone)]
pub struct TableInfo {
    rows: usize,
    cols: Vec<ColumnStats>,
    names: Vec<String>,
}

static_assertions::assert_impl_all!(TableInfo: Send, Sync);

impl TableInfo {
    /// Profile every column of `table`.
    pub fn new(table: &Table) -> Self {
        #[cfg(feature = "parallel")]
        let cols: Vec<ColumnStats> = (0..table.cols())
            .into_par_iter()
            .map(|col| ColumnStats::new(table, col))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let cols: Vec<ColumnStats> = (0..table.cols())
            .map(|col| ColumnStats::new(table, col))
            .collect();

        for stats in &cols {
            debug!(
                "Column {} classified as {} ({} missing, {} numbers, {} words)",
                stats.col(),
                stats.column_type().as_str(),
                stats.missing(),
                stats.numbers(),
                stats.words()
            );
        }

        Self {
            rows: table.rows(),
            names: (0..table.cols()).map(|c| table.column_name(c)).collect(),
            cols,
        }
    }

    /// Number of rows profiled.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols.len()
    }

    /// Full statistics for one column.
    ///
    /// Panics if `col >= self.cols()`.
    pub fn info(&self, col: usize) -> &ColumnStats {
        &self.cols[col]
    }

    pub fn name(&self, col: usize) -> &str {
        &self.names[col]
    }

    pub fn is_numeric(&self, col: usize) -> bool {
        self.cols[col].is_numeric()
    }

    pub fn is_binary(&self, col: usize) -> bool {
        self.cols[col].is_binary()
    }

    pub fn is_integer(&self, col: usize) -> bool {
        self.cols[col].is_integer()
    }

    pub fn has_missing(&self, col: usize) -> bool {
        self.cols[col].has_missing()
    }

    pub fn max(&self, col: usize) -> f64 {
        self.cols[col].max()
    }

    pub fn min(&self, col: usize) -> f64 {
        self.cols[col].min()
    }

    pub fn avg(&self, col: usize) -> f64 {
        self.cols[col].avg()
    }

    pub fn stdev(&self, col: usize) -> f64 {
        self.cols[col].stdev()
    }

    /// Encoding representation for a column.
    pub fn kind(&self, col: usize) -> ColumnKind {
        let stats = &self.cols[col];
        if stats.is_numeric() {
            ColumnKind::Numeric {
                has_missing: stats.has_missing(),
            }
        } else {
            ColumnKind::Categorical
        }
    }

    /// Serializable summary of every column.
    pub fn profile(&self) -> TableProfile {
        let columns = self
            .cols
            .iter()
            .map(|s| ColumnSummary {
                index: s.col(),
                name: self.names[s.col()].clone(),
                column_type: s.column_type(),
                count: s.count(),
                missing: s.missing(),
                integers: s.integers(),
                numbers: s.numbers(),
                words: s.words(),
                min: s.min(),
                max: s.max(),
                mean: s.avg(),
                stdev: s.stdev(),
                is_binary: s.is_binary(),
            })
            .collect();

        TableProfile {
            rows: self.rows,
            cols: self.cols(),
            columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnType;
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        Table::from_rows(vec![
            vec![Some("1"), Some("red"), Some("0.5"), None],
            vec![Some("0"), Some("blue"), None, None],
            vec![Some("1"), Some("red"), Some("1.5"), Some("x")],
        ])
    }

    #[test]
    fn test_one_stats_per_column() {
        let info = TableInfo::new(&table());
        assert_eq!(info.cols(), 4);
        assert_eq!(info.rows(), 3);
        for col in 0..info.cols() {
            assert_eq!(info.info(col).col(), col);
            assert_eq!(info.info(col).count(), 3);
        }
    }

    #[test]
    fn test_forwarding_accessors() {
        let info = TableInfo::new(&table());
        assert!(info.is_numeric(0));
        assert!(info.is_integer(0));
        assert!(info.is_binary(0));
        assert!(!info.is_numeric(1));
        assert!(info.is_numeric(2));
        assert!(info.has_missing(2));
        assert_eq!(info.min(2), 0.5);
        assert_eq!(info.max(2), 1.5);
        assert_eq!(info.avg(2), 1.0);
        assert!((info.stdev(2) - 0.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_kinds() {
        let info = TableInfo::new(&table());
        assert_eq!(info.kind(0), ColumnKind::Numeric { has_missing: false });
        assert_eq!(info.kind(1), ColumnKind::Categorical);
        assert_eq!(info.kind(2), ColumnKind::Numeric { has_missing: true });
        assert_eq!(info.kind(3), ColumnKind::Categorical);
    }

    #[test]
    fn test_profile() {
        let profile = TableInfo::new(&table()).profile();
        assert_eq!(profile.rows, 3);
        assert_eq!(profile.cols, 4);
        let types: Vec<_> = profile.columns.iter().map(|c| c.column_type).collect();
        assert_eq!(
            types,
            vec![
                ColumnType::Integer,
                ColumnType::Categorical,
                ColumnType::Real,
                ColumnType::Categorical
            ]
        );
        assert_eq!(profile.columns[1].name, "column_2");
        assert_eq!(profile.columns[3].missing, 2);
    }

    #[test]
    fn test_empty_table() {
        let info = TableInfo::new(&Table::new());
        assert_eq!(info.cols(), 0);
        assert!(info.profile().columns.is_empty());
    }
}
