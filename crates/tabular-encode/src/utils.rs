//! Shared utilities for field normalization and value classification.

// =============================================================================
// Field Normalization
// =============================================================================

/// Trim a raw field, mapping empty and all-whitespace text to `None`.
///
/// # Example
///
/// ```rust,ignore
/// use tabular_encode::utils::normalize_field;
///
/// assert_eq!(normalize_field(Some("  42 ")), Some("42".to_string()));
/// assert_eq!(normalize_field(Some(" \t")), None);
/// ```
pub fn normalize_field<S: AsRef<str>>(raw: Option<S>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// =============================================================================
// Value Classification
// =============================================================================

/// How a single non-missing cell is interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedValue {
    /// Whole number literal.
    Integer(i64),
    /// Any other real number literal.
    Real(f64),
    /// Text that is not a numeric literal.
    Word,
}

impl ParsedValue {
    /// The numeric value, if any.
    #[inline]
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(v as f64),
            Self::Real(v) => Some(v),
            Self::Word => None,
        }
    }
}

/// Parse a whole-number literal.
#[inline]
pub fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Parse a finite real-number literal.
///
/// `nan`, `inf` and `infinity` spellings parse as `f64` but are rejected, so
/// such cells are categorical and never poison a column's sum or variance.
#[inline]
pub fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Classify a value: whole number first, then real number, else a word.
///
/// Text that fails both parses is categorical data, never an error.
pub fn classify_value(s: &str) -> ParsedValue {
    if let Some(v) = parse_integer(s) {
        ParsedValue::Integer(v)
    } else if let Some(v) = parse_number(s) {
        ParsedValue::Real(v)
    } else {
        ParsedValue::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== normalize_field tests ====================

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_field(Some("  a b ")), Some("a b".to_string()));
    }

    #[test]
    fn test_normalize_blank_is_missing() {
        assert_eq!(normalize_field(Some("")), None);
        assert_eq!(normalize_field(Some("   ")), None);
        assert_eq!(normalize_field(Some("\t\n")), None);
        assert_eq!(normalize_field::<&str>(None), None);
    }

    // ==================== classify_value tests ====================

    #[test]
    fn test_classify_integer() {
        assert_eq!(classify_value("42"), ParsedValue::Integer(42));
        assert_eq!(classify_value("-7"), ParsedValue::Integer(-7));
        assert_eq!(classify_value("+3"), ParsedValue::Integer(3));
    }

    #[test]
    fn test_classify_real() {
        assert_eq!(classify_value("1.5"), ParsedValue::Real(1.5));
        assert_eq!(classify_value("1e3"), ParsedValue::Real(1000.0));
        assert_eq!(classify_value("1.0"), ParsedValue::Real(1.0));
    }

    #[test]
    fn test_classify_word() {
        assert_eq!(classify_value("abc"), ParsedValue::Word);
        assert_eq!(classify_value("1,234"), ParsedValue::Word);
        assert_eq!(classify_value("$5"), ParsedValue::Word);
    }

    #[test]
    fn test_integer_overflow_falls_back_to_real() {
        let big = "99999999999999999999";
        assert!(parse_integer(big).is_none());
        assert!(matches!(classify_value(big), ParsedValue::Real(_)));
    }

    #[test]
    fn test_non_finite_spellings_are_words() {
        for text in ["NaN", "nan", "inf", "-Infinity", "1e999"] {
            assert_eq!(classify_value(text), ParsedValue::Word, "{}", text);
        }
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(ParsedValue::Integer(2).as_f64(), Some(2.0));
        assert_eq!(ParsedValue::Real(0.5).as_f64(), Some(0.5));
        assert_eq!(ParsedValue::Word.as_f64(), None);
    }
}
