//! Error types for typed status conversions

use thiserror::Error;

/// Errors returned when an integer does not name a known status
///
/// The string lookups never produce these; they fall back to an
/// "unknown" rendering instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    /// Integer is not a defined command result code
    #[error("unknown command status code: {0}")]
    UnknownCommandCode(i32),

    /// Integer is not a defined focuser state
    #[error("unknown focuser status code: {0}")]
    UnknownFocuserCode(i32),
}

impl StatusError {
    /// The integer that failed to convert
    pub fn code(&self) -> i32 {
        match self {
            Self::UnknownCommandCode(code) | Self::UnknownFocuserCode(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StatusError::UnknownCommandCode(-102).to_string(),
            "unknown command status code: -102"
        );
        assert_eq!(
            StatusError::UnknownFocuserCode(4).to_string(),
            "unknown focuser status code: 4"
        );
    }

    #[test]
    fn test_code_accessor() {
        assert_eq!(StatusError::UnknownCommandCode(5).code(), 5);
        assert_eq!(StatusError::UnknownFocuserCode(-1).code(), -1);
    }
}
