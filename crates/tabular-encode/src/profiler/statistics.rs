//! Single-pass descriptive statistics for one column.

use crate::table::Table;
use crate::types::ColumnType;
use crate::utils::{ParsedValue, classify_value};

/// Statistics for one column, computed in one pass over its values.
///
/// Variance uses Welford's online update, which stays accurate when values
/// share a large common offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    col: usize,
    count: usize,
    missing: usize,
    integers: usize,
    numbers: usize,
    min: f64,
    max: f64,
    sum: f64,
    variance: f64,
    stdev: f64,
}

impl ColumnStats {
    /// Compute statistics for column `col` of `table`.
    ///
    /// `col` must be below `table.cols()`.
    pub fn new(table: &Table, col: usize) -> Self {
        let values = (0..table.rows()).map(|row| {
            table
                .row(row)
                .ok()
                .and_then(|fields| fields.get(col))
                .and_then(|f| f.as_deref())
        });
        Self::from_values(col, values)
    }

    /// Compute statistics from an arbitrary sequence of normalized values.
    pub fn from_values<'a, I>(col: usize, values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut stats = ColumnStats {
            col,
            count: 0,
            missing: 0,
            integers: 0,
            numbers: 0,
            min: 0.0,
            max: 0.0,
            sum: 0.0,
            variance: 0.0,
            stdev: 0.0,
        };

        let mut mean = 0.0;
        let mut m2 = 0.0;

        for value in values {
            stats.count += 1;

            let Some(value) = value else {
                stats.missing += 1;
                continue;
            };

            let parsed = classify_value(value);
            if matches!(parsed, ParsedValue::Integer(_)) {
                stats.integers += 1;
            }
            let Some(x) = parsed.as_f64() else {
                continue;
            };

            stats.numbers += 1;
            if stats.numbers == 1 {
                stats.min = x;
                stats.max = x;
            } else {
                stats.min = stats.min.min(x);
                stats.max = stats.max.max(x);
            }
            stats.sum += x;

            let n = stats.numbers as f64;
            let delta = x - mean;
            mean += delta / n;
            m2 += delta * (x - mean);
        }

        if stats.numbers >= 2 {
            stats.variance = m2 / (stats.numbers - 1) as f64;
        }
        stats.stdev = stats.variance.sqrt();

        stats
    }

    /// Column index this summary describes.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Values that parsed as whole numbers.
    pub fn integers(&self) -> usize {
        self.integers
    }

    /// Values that parsed as any number, whole numbers included.
    pub fn numbers(&self) -> usize {
        self.numbers
    }

    /// Non-missing values that are not numbers.
    pub fn words(&self) -> usize {
        self.count - self.missing - self.numbers
    }

    /// Non-missing values.
    pub fn values(&self) -> usize {
        self.count - self.missing
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Smallest number, 0 when there are none.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest number, 0 when there are none.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Mean of the numeric values, 0 when there are none.
    pub fn avg(&self) -> f64 {
        if self.numbers > 0 {
            self.sum / self.numbers as f64
        } else {
            0.0
        }
    }

    /// Sample variance (n - 1 denominator) of the numeric values.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    pub fn has_missing(&self) -> bool {
        self.missing > 0
    }

    /// True when the column has no non-missing values.
    pub fn is_empty(&self) -> bool {
        self.values() == 0
    }

    pub fn is_integer(&self) -> bool {
        !self.is_empty() && self.values() == self.integers
    }

    pub fn is_numeric(&self) -> bool {
        !self.is_empty() && self.values() == self.numbers
    }

    /// Whole numbers drawn from {0, 1} only.
    ///
    /// Reals such as `0.0` and `1.0` do not count.
    pub fn is_binary(&self) -> bool {
        self.is_integer() && self.min >= 0.0 && self.max <= 1.0
    }

    /// Inferred semantic type of the column.
    pub fn column_type(&self) -> ColumnType {
        if self.is_empty() {
            ColumnType::Missing
        } else if self.is_integer() {
            ColumnType::Integer
        } else if self.is_numeric() {
            ColumnType::Real
        } else {
            ColumnType::Categorical
        }
    }
}
