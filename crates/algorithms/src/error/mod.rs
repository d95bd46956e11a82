//! Error handling for the digest engine

use core::fmt;

use fips180_api::{Error as CoreError, Result as CoreResult};

/// The error type for the digest engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Message bit length exceeds what the variant's length field encodes
    LengthOverflow {
        /// Algorithm that rejected the message
        algorithm: &'static str,
        /// Offending message length in bits
        bit_length: u128,
    },

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

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create a LengthOverflow error
    pub fn overflow(algorithm: &'static str, bit_length: u128) -> Self {
        Error::LengthOverflow {
            algorithm,
            bit_length,
        }
    }
}

/// Result type for digest engine operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LengthOverflow {
                algorithm,
                bit_length,
            } => {
                write!(
                    f,
                    "Message too long for {}: {} bits exceeds the length field",
                    algorithm, bit_length
                )
            }
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::LengthOverflow {
                algorithm,
                bit_length,
            } => CoreError::LengthOverflow {
                context: algorithm,
                bit_length,
            },
            Error::Parameter { name, reason } => CoreError::invalid_parameter(name, reason),
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

/// Convert an engine result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use fips180_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
