//! Dense row-major matrix used as the encoder output.

use crate::error::{EncodeError, Result};
use serde::{Deserialize, Serialize};

/// A fixed-size, row-major `f64` buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

static_assertions::assert_impl_all!(Matrix: Send, Sync);

impl Matrix {
    /// A `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        let idx = self.index(i, j)?;
        Ok(self.data[idx])
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        let idx = self.index(i, j)?;
        self.data[idx] = value;
        Ok(())
    }

    /// One row as a slice.
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        if i >= self.rows {
            return Err(self.out_of_range(i, 0));
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows || j >= self.cols {
            return Err(self.out_of_range(i, j));
        }
        Ok(i * self.cols + j)
    }

    fn out_of_range(&self, row: usize, col: usize) -> EncodeError {
        EncodeError::OutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
