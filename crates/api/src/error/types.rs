//! Error type definitions for digest operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for digest operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Message bit length does not fit the variant's length field
    LengthOverflow {
        context: &'static str,
        bit_length: u128,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for digest operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an `InvalidParameter` error
    ///
    /// `message` is kept only when the `std` feature of this crate is on.
    pub fn invalid_parameter(context: &'static str, message: &'static str) -> Self {
        #[cfg(not(feature = "std"))]
        let _ = message;
        Self::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: message.into(),
        }
    }

    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::LengthOverflow { bit_length, .. } => Self::LengthOverflow {
                context,
                bit_length,
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            #[cfg(feature = "std")]
            Self::Other { message, .. } => Self::Other { context, message },
            #[cfg(not(feature = "std"))]
            Self::Other { .. } => Self::Other { context },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }

    /// Whether this error reports a message too long for its algorithm
    pub fn is_length_overflow(&self) -> bool {
        matches!(self, Self::LengthOverflow { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthOverflow {
                context,
                bit_length,
            } => {
                write!(
                    f,
                    "{}: message length of {} bits overflows the length field",
                    context, bit_length
                )
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
