//! Tabular Feature Encoding Library
//!
//! Turns a delimited text table into a dense numeric matrix suitable for
//! statistical models.
//!
//! # Overview
//!
//! - **Ingestion**: [`Table`] trims fields, maps blanks to missing and drops
//!   rows with no values
//! - **Type inference**: every column is classified as missing, integer, real
//!   or categorical
//! - **Statistics**: [`ColumnStats`] computes counts, min/max/sum and a
//!   numerically stable (Welford) variance in one pass
//! - **Encoding**: [`Encoder`] emits one-hot blocks for categorical columns,
//!   value columns with optional missing indicators for numeric columns, and
//!   optional standardization
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tabular_encode::{Encoder, EncoderConfig, LoaderConfig, load_csv};
//!
//! let table = load_csv("data.csv", &LoaderConfig::builder().has_header(true).build()?)?;
//!
//! let config = EncoderConfig::builder().standardize(true).build();
//! let encoded = Encoder::new(config).encode(&table)?;
//!
//! println!("{} features", encoded.matrix.cols());
//! for name in &encoded.feature_names {
//!     println!("  {}", name);
//! }
//! ```
//!
//! # Profiling Only
//!
//! ```rust,ignore
//! use tabular_encode::{Table, TableInfo};
//!
//! let table = Table::from_rows(vec![
//!     vec![Some("2"), Some("red")],
//!     vec![Some("4"), None],
//! ]);
//! let info = TableInfo::new(&table);
//! assert!(info.is_numeric(0));
//! println!("{}", serde_json::to_string_pretty(&info.profile())?);
//! ```
//!
//! # Parallelism
//!
//! With the `parallel` feature, column statistics and column blocks are
//! computed on the rayon thread pool. Output is identical to the sequential
//! build.

pub mod config;
pub mod encoder;
pub mod error;
pub mod profiler;
pub mod table;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{
    ConfigValidationError, EncoderConfig, EncoderConfigBuilder, LoaderConfig, LoaderConfigBuilder,
};
pub use encoder::{ColumnLayout, Encoded, Encoder, Matrix};
pub use error::{EncodeError, Result as EncodeResult, ResultExt};
pub use profiler::{ColumnStats, TableInfo, WordCount};
pub use table::{Table, load_csv, table_from_dataframe};
pub use types::{ColumnKind, ColumnSummary, ColumnType, TableProfile};
pub use utils::{ParsedValue, classify_value, normalize_field};
