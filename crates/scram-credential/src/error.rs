//! SCRAM credential error types.

use thiserror::Error;

/// Errors from credential derivation.
///
/// None of these are recoverable by retry: unsupported mechanisms and
/// invalid iteration counts indicate operator misconfiguration, and an
/// entropy failure must abort generation rather than fall back to a
/// weaker random source.
#[derive(Debug, Error)]
pub enum ScramError {
    /// The requested hash algorithm is not a supported SCRAM mechanism.
    #[error("unsupported SCRAM mechanism: {0}")]
    UnsupportedMechanism(String),

    /// The PBKDF2 iteration count must be positive.
    #[error("invalid iteration count: {0} (must be positive)")]
    InvalidIterations(u32),

    /// The secure random source failed to produce salt bytes.
    #[error("secure random source unavailable")]
    EntropySource,
}

/// Result type for credential operations.
pub type ScramResult<T> = Result<T, ScramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ScramError::UnsupportedMechanism("md5".to_string());
        assert_eq!(err.to_string(), "unsupported SCRAM mechanism: md5");

        let err = ScramError::InvalidIterations(0);
        assert!(err.to_string().contains("must be positive"));
    }
}
