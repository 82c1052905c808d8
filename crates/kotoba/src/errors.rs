//! # Error Types

/// Errors from kotoba operations.
#[derive(Debug, thiserror::Error)]
pub enum KotobaError {
    /// Batch size must be positive.
    #[error("batch size ({size}) must be > 0")]
    InvalidBatchSize {
        /// The rejected batch size.
        size: usize,
    },

    /// The unknown-token index does not name a supplied special token.
    #[error("unknown-token index ({index}) out of range for {len} special tokens")]
    UnknownIndexOutOfRange {
        /// The requested index.
        index: usize,

        /// The number of special tokens supplied.
        len: usize,
    },

    /// Coverage was requested against an empty target set.
    #[error("coverage target is empty")]
    EmptyCoverageSet,

    /// A token contains a line break and cannot be written to a token list.
    #[error("token {token:?} contains a line break")]
    UnrepresentableToken {
        /// The offending token.
        token: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for kotoba operations.
pub type KResult<T> = core::result::Result<T, KotobaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            KotobaError::InvalidBatchSize { size: 0 }.to_string(),
            "batch size (0) must be > 0"
        );
        assert_eq!(
            KotobaError::UnknownIndexOutOfRange { index: 3, len: 2 }.to_string(),
            "unknown-token index (3) out of range for 2 special tokens"
        );

        let err: KotobaError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, KotobaError::Io(_)));
        assert_eq!(err.to_string(), "gone");
    }
}
