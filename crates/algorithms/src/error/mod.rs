//! Error handling for nonce generation primitives

use core::fmt;

use starknonce_api::Error as ApiError;

/// The error type for nonce generation primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for nonce generation primitives
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "invalid length in {}: expected {} bytes, got {}",
                context, expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => ApiError::InvalidParameter {
                context: name,
                reason,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => ApiError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

/// Validation helpers shared by the primitive implementations
pub mod validate {
    use super::{Error, Result};

    /// Validate an exact buffer length
    pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
        if actual != expected {
            return Err(Error::Length {
                context,
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Validate an arbitrary parameter predicate
    pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
        if !condition {
            return Err(Error::param(name, reason));
        }
        Ok(())
    }
}
