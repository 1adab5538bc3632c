use serde::{Deserialize, Serialize};

/// Semantic type inferred for a column from its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// No non-missing values.
    Missing,
    /// Every value is a whole number.
    Integer,
    /// Every value is a number, at least one is not whole.
    Real,
    /// At least one value is not a number.
    Categorical,
}

impl ColumnType {
    /// Short lowercase name for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Categorical => "categorical",
        }
    }
}

/// How a column is represented in the encoded matrix.
///
/// Selected once per column from its statistics before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// A value column, plus a missing-indicator column when `has_missing`
    /// and indicators are enabled.
    Numeric { has_missing: bool },
    /// One-hot columns, one per distinct value.
    Categorical,
}

/// Serializable per-column statistics, as reported by the CLI `--profile` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    pub column_type: ColumnType,
    pub count: usize,
    pub missing: usize,
    pub integers: usize,
    pub numbers: usize,
    pub words: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stdev: f64,
    pub is_binary: bool,
}

/// Serializable profile of a whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    pub rows: usize,
    pub cols: usize,
    pub columns: Vec<ColumnSummary>,
}

impl TableProfile {
    /// Number of columns whose inferred type is numeric.
    pub fn numeric_columns(&self) -> usize {
        self.columns
            .iter()
            .filter(|c| matches!(c.column_type, ColumnType::Integer | ColumnType::Real))
            .count()
    }

    /// Fraction of all cells that are missing (0.0 - 1.0).
    pub fn missing_ratio(&self) -> f64 {
        let cells = self.rows * self.cols;
        if cells == 0 {
            return 0.0;
        }
        let missing: usize = self.columns.iter().map(|c| c.missing).sum();
        missing as f64 / cells as f64
    }
}
