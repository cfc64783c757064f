//! Error handling for the starknonce ecosystem
//!
//! Two faces of the same failure: a structured [`Error`] for Rust callers
//! and a flat integer [`Status`] for the C ABI bridge. Status `0` always
//! means success; every error variant maps to a distinct non-zero code.

use core::fmt;

/// Primary error type for nonce generation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input or output buffer has the wrong length
    InvalidLength {
        /// Operation that rejected the buffer
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter outside its contract (e.g. a degenerate subgroup order)
    InvalidParameter {
        /// Operation that rejected the parameter
        context: &'static str,
        /// Reason the parameter is invalid
        reason: &'static str,
    },

    /// Result could not be rendered into the fixed-width output encoding
    ///
    /// Structurally unreachable when the range check upstream is intact;
    /// surfacing it instead of panicking keeps the bridge boundary total.
    EncodingFailed {
        /// Operation that failed to encode
        context: &'static str,
    },

    /// Other error
    Other {
        /// Context where the error occurred
        context: &'static str,
    },
}

/// Result type for nonce generation operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "invalid length in {}: expected {} bytes, got {}",
                context, expected, actual
            ),
            Error::InvalidParameter { context, reason } => {
                write!(f, "invalid parameter in {}: {}", context, reason)
            }
            Error::EncodingFailed { context } => {
                write!(f, "encoding failed in {}", context)
            }
            Error::Other { context } => write!(f, "error in {}", context),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Integer status codes reported across the C ABI bridge
///
/// Matches the binary contract of the native libraries the host toolkits
/// historically linked against: zero is success, outputs are meaningful
/// only on success.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Operation succeeded; the output buffer holds the result
    Success = 0,
    /// A required pointer argument was null
    NullPointer = 1,
    /// A buffer had the wrong length
    InvalidLength = 2,
    /// A parameter violated its contract
    InvalidParameter = 3,
    /// The result could not be encoded into the output buffer
    EncodingFailed = 4,
    /// Any other internal failure
    InternalError = 5,
}

impl Status {
    /// The raw code reported across the bridge
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidLength { .. } => Status::InvalidLength,
            Error::InvalidParameter { .. } => Status::InvalidParameter,
            Error::EncodingFailed { .. } => Status::EncodingFailed,
            Error::Other { .. } => Status::InternalError,
        }
    }
}
