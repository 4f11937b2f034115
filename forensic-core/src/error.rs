//! Internal error type for the forensic emit path.
//!
//! None of these errors reach callers of the logging operations: the emit
//! boundary absorbs them and reports through the `log` facade instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForensicError {
    #[error("failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write log entry: {0}")]
    Write(#[from] std::io::Error),

    #[error("invalid value for {var}: {value:?}")]
    InvalidToggle { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_toggle_message() {
        let err = ForensicError::InvalidToggle {
            var: "FORENSIC_ON".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for FORENSIC_ON: \"maybe\"");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ForensicError = io.into();
        assert!(matches!(err, ForensicError::Write(_)));
        assert!(err.to_string().contains("closed"));
    }
}
