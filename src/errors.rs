//! Error types
//!
//! Degenerate inputs (no sentences, no similar sentence pairs) are not
//! errors; they produce an empty summary.

use thiserror::Error;

/// Errors raised while configuring or running the summarizer
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The requested language has no sentence cleaner
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),

    /// A configuration value is out of range
    #[error("invalid config field '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// A JSON configuration document could not be parsed
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizeError {
    pub(crate) fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let err = SummarizeError::UnsupportedLanguage("klingon".to_string());
        assert_eq!(err.to_string(), "unsupported language 'klingon'");
    }

    #[test]
    fn test_invalid_config_names_field() {
        let err = SummarizeError::invalid_config("ratio", "must be within [0, 1], got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid config field 'ratio': must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SummarizeError = parse.unwrap_err().into();
        assert!(matches!(err, SummarizeError::Json(_)));
    }
}
