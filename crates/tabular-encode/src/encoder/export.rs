//! Export of encoded matrices through polars.

use super::Encoded;
use crate::error::{Result, ResultExt};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl Encoded {
    /// Convert to a DataFrame with one `f64` column per feature.
    ///
    /// Duplicate feature names get a numeric suffix.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut seen = HashSet::new();
        let columns = self
            .feature_names
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let mut unique = name.clone();
                let mut n = 1;
                while !seen.insert(unique.clone()) {
                    n += 1;
                    unique = format!("{}_{}", name, n);
                }
                let values: Vec<f64> = self
                    .matrix
                    .iter_rows()
                    .map(|row| row[j])
                    .collect();
                Column::new(unique.into(), values)
            })
            .collect::<Vec<_>>();

        DataFrame::new(columns).context("Building encoded frame")
    }

    /// Write the matrix as CSV with a feature-name header.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut df = self.to_dataframe()?;
        let mut file = std::fs::File::create(path)?;

        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .finish(&mut df)
            .context(format!("Writing {}", path.display()))?;

        info!("Encoded matrix saved: {}", path.display());
        Ok(())
    }
}
