//! Configuration types for loading and encoding tables.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic setup.

use serde::{Deserialize, Serialize};

/// Configuration for the [`Encoder`](crate::encoder::Encoder).
///
/// Use [`EncoderConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use tabular_encode::EncoderConfig;
///
/// let config = EncoderConfig::builder()
///     .standardize(true)
///     .missing_indicators(false)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Rescale numeric, non-binary columns to `(x - mean) / stdev`.
    /// Default: false
    pub standardize: bool,

    /// Emit an extra 0/1 column for numeric columns that contain missing values.
    /// When disabled, missing numeric cells are encoded as 0.
    /// Default: true
    pub missing_indicators: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            standardize: false,
            missing_indicators: true,
        }
    }
}

impl EncoderConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }
}

/// Builder for [`EncoderConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EncoderConfigBuilder {
    standardize: Option<bool>,
    missing_indicators: Option<bool>,
}

impl EncoderConfigBuilder {
    /// Enable or disable per-column standardization.
    pub fn standardize(mut self, standardize: bool) -> Self {
        self.standardize = Some(standardize);
        self
    }

    /// Enable or disable missing-value indicator columns.
    pub fn missing_indicators(mut self, enable: bool) -> Self {
        self.missing_indicators = Some(enable);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EncoderConfig {
        EncoderConfig {
            standardize: self.standardize.unwrap_or(false),
            missing_indicators: self.missing_indicators.unwrap_or(true),
        }
    }
}

/// Configuration for reading delimited files into a [`Table`](crate::table::Table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field separator byte.
    /// Default: b','
    pub delimiter: u8,

    /// Whether the first line holds column names rather than data.
    /// Default: false
    pub has_header: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
        }
    }
}

impl LoaderConfig {
    /// Create a new configuration builder.
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if matches!(self.delimiter, b'"' | b'\r' | b'\n') {
            return Err(ConfigValidationError::InvalidDelimiter(
                self.delimiter as char,
            ));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid delimiter {0:?} (quotes and line breaks are reserved)")]
    InvalidDelimiter(char),
}

/// Builder for [`LoaderConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct LoaderConfigBuilder {
    delimiter: Option<u8>,
    has_header: Option<bool>,
}

impl LoaderConfigBuilder {
    /// Set the field separator.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Treat the first line as a header row.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `LoaderConfig` or an error if validation fails.
    pub fn build(self) -> Result<LoaderConfig, ConfigValidationError> {
        let config = LoaderConfig {
            delimiter: self.delimiter.unwrap_or(b','),
            has_header: self.has_header.unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }
}
