//! Row-major text table.
//!
//! A [`Table`] stores normalized text fields: every stored field is either
//! missing (`None`) or a non-empty, trimmed string. Rows may be shorter than
//! the table width; absent trailing fields read as missing.

mod source;

pub use source::{load_csv, table_from_dataframe};

use crate::error::{EncodeError, Result};
use crate::utils::normalize_field;
use tracing::{info, trace};

/// A row-major grid of optional text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<Option<String>>>,
    cols: usize,
    names: Option<Vec<String>>,
}

static_assertions::assert_impl_all!(Table: Send, Sync);

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by appending every row of `rows` in order.
    ///
    /// Rows whose fields are all blank are dropped, see [`Table::append`].
    pub fn from_rows<R, F, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = F>,
        F: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut seen = 0usize;
        for row in rows {
            seen += 1;
            table.append(row);
        }
        info!(
            "Ingested {} of {} rows ({} columns)",
            table.rows(),
            seen,
            table.cols()
        );
        table
    }

    /// Attach column names. Names beyond the table width are kept so that a
    /// header can describe columns that are entirely missing in the data.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Column names, if the table was loaded with them.
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Display name of a column: its header name or `column_{n}` (1-based).
    pub fn column_name(&self, col: usize) -> String {
        self.names
            .as_ref()
            .and_then(|names| names.get(col))
            .cloned()
            .unwrap_or_else(|| format!("column_{}", col + 1))
    }

    /// Normalize and append one raw row.
    ///
    /// Each field is trimmed; empty or whitespace-only fields become missing.
    /// A row with no remaining values is discarded. Returns whether the row
    /// was stored.
    pub fn append<F, S>(&mut self, raw: F) -> bool
    where
        F: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let row: Vec<Option<String>> = raw.into_iter().map(normalize_field).collect();

        if row.iter().all(Option::is_none) {
            trace!("Dropping blank row ({} fields)", row.len());
            return false;
        }

        self.cols = self.cols.max(row.len());
        self.rows.push(row);
        true
    }

    /// Number of stored rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Table width: the longest stored row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field at `(row, col)`, `None` when missing.
    ///
    /// Bounds are checked against the table dimensions, not the row length.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&str>> {
        if row >= self.rows() || col >= self.cols {
            return Err(EncodeError::OutOfRange {
                row,
                col,
                rows: self.rows(),
                cols: self.cols,
            });
        }
        Ok(self.field(row, col))
    }

    /// The stored fields of a row. May be shorter than [`Table::cols`].
    pub fn row(&self, row: usize) -> Result<&[Option<String>]> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or(EncodeError::OutOfRange {
                row,
                col: 0,
                rows: self.rows(),
                cols: self.cols,
            })
    }

    /// All values of one column, top to bottom.
    pub fn column_values(&self, col: usize) -> Result<impl Iterator<Item = Option<&str>> + '_> {
        if col >= self.cols {
            return Err(EncodeError::OutOfRange {
                row: 0,
                col,
                rows: self.rows(),
                cols: self.cols,
            });
        }
        Ok((0..self.rows()).map(move |row| self.field(row, col)))
    }

    /// Copy columns `[start, end)` of every row into a new table.
    ///
    /// Row count is preserved, including rows that are blank within the slice.
    pub fn select_cols(&self, start: usize, end: usize) -> Result<Table> {
        if end > self.cols || end <= start {
            return Err(EncodeError::InvalidRange {
                start,
                end,
                cols: self.cols,
            });
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let stop = end.min(row.len());
                if start < stop {
                    row[start..stop].to_vec()
                } else {
                    Vec::new()
                }
            })
            .collect();

        let names = self.names.as_ref().map(|names| {
            (start..end)
                .map(|col| {
                    names
                        .get(col)
                        .cloned()
                        .unwrap_or_else(|| format!("column_{}", col + 1))
                })
                .collect()
        });

        Ok(Table {
            rows,
            cols: end - start,
            names,
        })
    }

    #[inline]
    fn field(&self, row: usize, col: usize) -> Option<&str> {
        self.rows[row].get(col).and_then(|f| f.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        Table::from_rows(vec![
            vec![Some("1"), Some("a"), Some("x")],
            vec![Some("2"), None],
            vec![Some(" 3 "), Some("c"), Some("z"), Some("extra")],
        ])
    }

    // ==================== append tests ====================

    #[test]
    fn test_width_is_longest_row() {
        let table = sample();
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 4);
    }

    #[test]
    fn test_blank_row_is_dropped() {
        let mut table = sample();
        let stored = table.append(vec![Some(""), Some(" "), None]);
        assert!(!stored);
        assert_eq!(table.rows(), 3);
    }

    #[test]
    fn test_blank_row_does_not_widen() {
        let mut table = Table::new();
        table.append(vec![Some("a")]);
        table.append(vec![None::<&str>, None, None, None, None]);
        assert_eq!(table.cols(), 1);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let table = sample();
        assert_eq!(table.get(2, 0).unwrap(), Some("3"));
    }

    #[test]
    fn test_whitespace_field_is_missing() {
        let table = Table::from_rows(vec![vec![Some("a"), Some("   ")]]);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.get(0, 1).unwrap(), None);
    }

    // ==================== get tests ====================

    #[test]
    fn test_short_row_reads_missing() {
        let table = sample();
        assert_eq!(table.get(1, 2).unwrap(), None);
        assert_eq!(table.get(1, 3).unwrap(), None);
    }

    #[test]
    fn test_get_out_of_range() {
        let table = sample();
        assert!(matches!(
            table.get(3, 0),
            Err(EncodeError::OutOfRange { row: 3, .. })
        ));
        assert!(matches!(
            table.get(0, 4),
            Err(EncodeError::OutOfRange { col: 4, .. })
        ));
        assert!(table.row(7).is_err());
    }

    #[test]
    fn test_column_values() {
        let table = sample();
        let values: Vec<_> = table.column_values(1).unwrap().collect();
        assert_eq!(values, vec![Some("a"), None, Some("c")]);
        assert!(table.column_values(9).is_err());
    }

    // ==================== select_cols tests ====================

    #[test]
    fn test_select_cols_copies_range() {
        let table = sample();
        let sliced = table.select_cols(1, 3).unwrap();
        assert_eq!(sliced.rows(), 3);
        assert_eq!(sliced.cols(), 2);
        assert_eq!(sliced.get(0, 0).unwrap(), Some("a"));
        assert_eq!(sliced.get(2, 1).unwrap(), Some("z"));
        assert_eq!(sliced.get(1, 1).unwrap(), None);
    }

    #[test]
    fn test_select_cols_keeps_blank_rows() {
        let table = sample();
        let sliced = table.select_cols(2, 4).unwrap();
        assert_eq!(sliced.rows(), table.rows());
        assert!(sliced.row(1).unwrap().is_empty());
    }

    #[test]
    fn test_select_cols_invalid_range() {
        let table = sample();
        assert!(matches!(
            table.select_cols(2, 2),
            Err(EncodeError::InvalidRange { .. })
        ));
        assert!(matches!(
            table.select_cols(3, 1),
            Err(EncodeError::InvalidRange { .. })
        ));
        assert!(matches!(
            table.select_cols(0, 5),
            Err(EncodeError::InvalidRange { end: 5, cols: 4, .. })
        ));
    }

    #[test]
    fn test_select_full_range_round_trip() {
        let table = sample();
        let sliced = table.select_cols(1, 4).unwrap();
        let again = sliced.select_cols(0, sliced.cols()).unwrap();
        for row in 0..table.rows() {
            for col in 1..4 {
                assert_eq!(again.get(row, col - 1).unwrap(), table.get(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_select_is_independent_copy() {
        let mut table = sample();
        let sliced = table.select_cols(0, 1).unwrap();
        table.append(vec![Some("4")]);
        assert_eq!(sliced.rows(), 3);
    }

    // ==================== names tests ====================

    #[test]
    fn test_column_names() {
        let table = sample().with_names(vec!["id".to_string(), "letter".to_string()]);
        assert_eq!(table.column_name(0), "id");
        assert_eq!(table.column_name(2), "column_3");

        let sliced = table.select_cols(1, 3).unwrap();
        assert_eq!(
            sliced.names().unwrap(),
            &["letter".to_string(), "column_3".to_string()]
        );
    }
}
