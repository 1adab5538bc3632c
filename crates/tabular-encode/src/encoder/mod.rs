//! Table to dense numeric matrix encoding.
//!
//! Each column becomes a contiguous block of output columns:
//!
//! - numeric: one value column, plus a missing indicator when the column has
//!   missing values and indicators are enabled
//! - categorical: one-hot columns, one per distinct value in sorted order
//!
//! Blocks are laid out left to right in source column order.
//!
//! # Example
//!
//! ```rust,ignore
//! use tabular_encode::{Encoder, EncoderConfig, Table};
//!
//! let table = Table::from_rows(vec![
//!     vec![Some("1.0"), Some("x")],
//!     vec![None, Some("y")],
//! ]);
//!
//! let encoded = Encoder::new(EncoderConfig::default()).encode(&table)?;
//! assert_eq!(encoded.matrix.cols(), 4);
//! ```

mod export;
mod matrix;

pub use matrix::Matrix;

use crate::config::EncoderConfig;
use crate::error::{EncodeError, Result};
use crate::profiler::{TableInfo, WordCount};
use crate::table::Table;
use crate::types::ColumnKind;
use crate::utils::classify_value;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Placement of one source column inside the encoded matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Source column index.
    pub column: usize,
    pub kind: ColumnKind,
    /// First output column of the block.
    pub offset: usize,
    pub width: usize,
    /// Whether values in the block were standardized.
    pub standardized: bool,
}

/// Result of encoding a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encoded {
    pub matrix: Matrix,
    pub layout: Vec<ColumnLayout>,
    /// One name per output column.
    pub feature_names: Vec<String>,
}

/// One column's encoded values before placement, row-major over `width`.
struct ColumnBlock {
    kind: ColumnKind,
    width: usize,
    standardized: bool,
    values: Vec<f64>,
    names: Vec<String>,
}

/// Converts a [`Table`] into a dense numeric [`Matrix`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

static_assertions::assert_impl_all!(Encoder: Send, Sync);

impl Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Profile `table` and encode it.
    pub fn encode(&self, table: &Table) -> Result<Encoded> {
        let info = TableInfo::new(table);
        self.encode_with_info(table, &info)
    }

    /// Encode `table` using statistics already computed for it.
    pub fn encode_with_info(&self, table: &Table, info: &TableInfo) -> Result<Encoded> {
        if info.rows() != table.rows() || info.cols() != table.cols() {
            return Err(EncodeError::InvalidConfig(format!(
                "table info describes a {}x{} table, got {}x{}",
                info.rows(),
                info.cols(),
                table.rows(),
                table.cols()
            )));
        }

        #[cfg(feature = "parallel")]
        let blocks = (0..table.cols())
            .into_par_iter()
            .map(|col| self.encode_column(table, info, col))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let blocks = (0..table.cols())
            .map(|col| self.encode_column(table, info, col))
            .collect::<Result<Vec<_>>>()?;

        let total: usize = blocks.iter().map(|b| b.width).sum();
        let mut matrix = Matrix::zeros(table.rows(), total);
        let mut layout = Vec::with_capacity(blocks.len());
        let mut feature_names = Vec::with_capacity(total);

        let mut offset = 0;
        for (col, block) in blocks.into_iter().enumerate() {
            for row in 0..table.rows() {
                for j in 0..block.width {
                    matrix.set(row, offset + j, block.values[row * block.width + j])?;
                }
            }

            layout.push(ColumnLayout {
                column: col,
                kind: block.kind,
                offset,
                width: block.width,
                standardized: block.standardized,
            });
            feature_names.extend(block.names);
            offset += block.width;
        }

        info!(
            "Encoded {}x{} table into {}x{} matrix",
            table.rows(),
            table.cols(),
            matrix.rows(),
            matrix.cols()
        );

        Ok(Encoded {
            matrix,
            layout,
            feature_names,
        })
    }

    /// Compute the block layout without building the matrix.
    ///
    /// Categorical widths still need one pass over each categorical column to
    /// count its distinct values.
    pub fn layout(&self, table: &Table, info: &TableInfo) -> Result<Vec<ColumnLayout>> {
        let mut layout = Vec::with_capacity(table.cols());
        let mut offset = 0;
        for col in 0..table.cols() {
            let kind = info.kind(col);
            let (width, standardized) = match kind {
                ColumnKind::Numeric { has_missing } => {
                    let indicator = has_missing && self.config.missing_indicators;
                    (1 + usize::from(indicator), self.standardizes(info, col))
                }
                ColumnKind::Categorical => {
                    let words: WordCount = table.column_values(col)?.flatten().collect();
                    (words.diff(), false)
                }
            };
            layout.push(ColumnLayout {
                column: col,
                kind,
                offset,
                width,
                standardized,
            });
            offset += width;
        }
        Ok(layout)
    }

    fn standardizes(&self, info: &TableInfo, col: usize) -> bool {
        let stats = info.info(col);
        self.config.standardize && !stats.is_binary() && stats.count() >= 2
    }

    fn encode_column(&self, table: &Table, info: &TableInfo, col: usize) -> Result<ColumnBlock> {
        match info.kind(col) {
            ColumnKind::Numeric { has_missing } => {
                self.encode_numeric(table, info, col, has_missing)
            }
            ColumnKind::Categorical => Self::encode_categorical(table, info, col),
        }
    }

    fn encode_numeric(
        &self,
        table: &Table,
        info: &TableInfo,
        col: usize,
        has_missing: bool,
    ) -> Result<ColumnBlock> {
        let stats = info.info(col);
        let indicator = has_missing && self.config.missing_indicators;
        let width = if indicator { 2 } else { 1 };

        let standardize = self.standardizes(info, col);
        let mean = stats.avg();
        let stdev = stats.stdev();

        let mut values = vec![0.0; table.rows() * width];
        for (row, value) in table.column_values(col)?.enumerate() {
            match value {
                None => {
                    if indicator {
                        values[row * width + 1] = 1.0;
                    }
                }
                Some(text) => {
                    let x = classify_value(text).as_f64().ok_or_else(|| {
                        EncodeError::InternalConsistency {
                            column: col,
                            value: text.to_string(),
                        }
                    })?;
                    values[row * width] = if !standardize {
                        x
                    } else if stdev > 0.0 {
                        (x - mean) / stdev
                    } else {
                        x - mean
                    };
                }
            }
        }

        let name = info.name(col);
        let mut names = vec![name.to_string()];
        if indicator {
            names.push(format!("{}_missing", name));
        }

        debug!(
            "Column {} encoded as numeric (width {}, standardized: {})",
            col, width, standardize
        );

        Ok(ColumnBlock {
            kind: ColumnKind::Numeric { has_missing },
            width,
            standardized: standardize,
            values,
            names,
        })
    }

    fn encode_categorical(table: &Table, info: &TableInfo, col: usize) -> Result<ColumnBlock> {
        let words: WordCount = table.column_values(col)?.flatten().collect();
        let width = words.diff();

        if width == 0 {
            warn!(
                "Column {} ('{}') has no values and contributes no output columns",
                col,
                info.name(col)
            );
        }

        let slots = words.slots();
        let mut values = vec![0.0; table.rows() * width];
        for (row, value) in table.column_values(col)?.enumerate() {
            let Some(text) = value else {
                continue;
            };
            let slot = slots.get(text).copied().ok_or_else(|| {
                EncodeError::InternalConsistency {
                    column: col,
                    value: text.to_string(),
                }
            })?;
            values[row * width + slot] = 1.0;
        }

        let name = info.name(col);
        let names = words
            .words()
            .map(|(word, _)| format!("{}={}", name, word))
            .collect();

        debug!(
            "Column {} encoded as categorical ({} distinct values)",
            col, width
        );

        Ok(ColumnBlock {
            kind: ColumnKind::Categorical,
            width,
            standardized: false,
            values,
            names,
        })
    }
}
