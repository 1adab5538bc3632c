//! Error types for table ingestion, profiling and encoding.
//!
//! This module provides the error hierarchy using `thiserror`. Errors are
//! serializable so the CLI can emit them as JSON alongside reports.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the encoding pipeline.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A row or column index lies outside the current table dimensions.
    #[error("Index ({row}, {col}) is out of range for a {rows}x{cols} table")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Malformed column slice bounds.
    #[error("Invalid column range [{start}, {end}) for a table with {cols} columns")]
    InvalidRange {
        start: usize,
        end: usize,
        cols: usize,
    },

    /// A categorical value is absent from the dictionary built from its own column.
    #[error("Value '{value}' in column {column} is missing from its dictionary")]
    InternalConsistency { column: usize, value: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Malformed delimited input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EncodeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Stable error code for machine consumers.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::InvalidRange { .. } => "INVALID_RANGE",
            Self::InternalConsistency { .. } => "INTERNAL_CONSISTENCY",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error indicates a logic defect rather than bad input.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::InternalConsistency { .. } => true,
            Self::WithContext { source, .. } => source.is_fatal(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for EncodeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("EncodeError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for encoding operations.
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EncodeError::Polars(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, csv::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EncodeError::Csv(e).with_context(context))
    }
}
