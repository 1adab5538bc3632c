//! Row sources for [`Table`].
//!
//! Delimited files are read record by record with a flexible reader, so rows
//! of any length reach [`Table::append`] intact and the table is as wide as its
//! longest row. Polars frames are copied column by column as text; type
//! inference happens later in the profiler.

use super::Table;
use crate::config::LoaderConfig;
use crate::error::{EncodeError, Result, ResultExt};
use ::csv::{ReaderBuilder, StringRecord};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Load a delimited file into a [`Table`].
///
/// Every field of every record is kept; short rows leave trailing cells
/// missing and long rows widen the table.
pub fn load_csv(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Table> {
    config
        .validate()
        .map_err(|e| EncodeError::InvalidConfig(e.to_string()))?;

    let path = path.as_ref();
    info!("Loading table from: {}", path.display());

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .quote(b'"')
        // Header handled here so it is never counted as a data row.
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(format!("Opening {}", path.display()))?;

    let mut table = Table::new();
    let mut names = None;
    let mut record = StringRecord::new();
    let mut records = 0usize;

    while reader
        .read_record(&mut record)
        .context(format!("Reading {}", path.display()))?
    {
        if config.has_header && names.is_none() {
            names = Some(record.iter().map(|f| f.trim().to_string()).collect());
            continue;
        }
        records += 1;
        table.append(record.iter().map(Some));
    }

    debug!(
        "Parsed {} records into {}x{} table",
        records,
        table.rows(),
        table.cols()
    );

    Ok(match names {
        Some(names) => table.with_names(names),
        None => table,
    })
}

/// Copy a DataFrame into a [`Table`], reading every column as text.
///
/// Nulls become missing fields; column names are kept.
pub fn table_from_dataframe(df: &DataFrame) -> Result<Table> {
    let columns = df
        .get_columns()
        .iter()
        .map(|col| col.as_materialized_series().cast(&DataType::String))
        .collect::<PolarsResult<Vec<Series>>>()
        .context("Casting columns to text")?;

    let text = columns
        .iter()
        .map(|s| s.str())
        .collect::<PolarsResult<Vec<&StringChunked>>>()?;

    let names = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let rows = (0..df.height()).map(|i| text.iter().map(move |ca| ca.get(i)));

    Ok(Table::from_rows(rows).with_names(names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_dataframe_reads_text() {
        let df = df! {
            "age" => [Some(31i64), None, Some(40)],
            "city" => [Some("Oslo"), Some("  "), Some("Rome")],
        }
        .unwrap();

        let table = table_from_dataframe(&df).unwrap();
        assert_eq!(table.rows(), 3);
        assert_eq!(table.cols(), 2);
        assert_eq!(table.get(0, 0).unwrap(), Some("31"));
        assert_eq!(table.get(1, 0).unwrap(), None);
        assert_eq!(table.get(1, 1).unwrap(), None);
        assert_eq!(table.column_name(1), "city");
    }

    #[test]
    fn test_from_dataframe_drops_null_rows() {
        let df = df! {
            "a" => [Some("x"), None],
            "b" => [Some("y"), None],
        }
        .unwrap();

        let table = table_from_dataframe(&df).unwrap();
        assert_eq!(table.rows(), 1);
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tabular_encode_{}_{}.csv",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_csv_keeps_fields_of_wider_later_rows() {
        let path = write_temp("wide_later", "1,a\n2,b,extra,more\n");
        let table = load_csv(&path, &LoaderConfig::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 4);
        assert_eq!(table.get(1, 3).unwrap(), Some("more"));
        assert_eq!(table.get(0, 2).unwrap(), None);
    }

    #[test]
    fn test_load_csv_header_and_quotes() {
        let path = write_temp("quoted", "name,note\n\"Smith, J\",\" hi \"\n,\n");
        let config = LoaderConfig::builder().has_header(true).build().unwrap();
        let table = load_csv(&path, &config).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.rows(), 1);
        assert_eq!(table.get(0, 0).unwrap(), Some("Smith, J"));
        assert_eq!(table.get(0, 1).unwrap(), Some("hi"));
        assert_eq!(table.column_name(1), "note");
    }

    #[test]
    fn test_load_csv_rejects_bad_delimiter() {
        let config = LoaderConfig {
            delimiter: b'\n',
            has_header: false,
        };
        let err = load_csv("does-not-matter.csv", &config).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }
}
