//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A key, digest, encoding, or identifier passed to an operation is
    /// malformed or out of range.
    InvalidArgument,

    /// The public key derived during key generation is not on the curve.
    ///
    /// This indicates an arithmetic bug rather than bad input.
    KeyGeneration,

    /// The random number generator failed, or a retry loop which draws fresh
    /// randomness on every attempt ran out of attempts.
    Randomness,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument => write!(f, "invalid argument"),
            Error::KeyGeneration => write!(f, "derived public key is not on the curve"),
            Error::Randomness => write!(f, "failed to obtain randomness"),
        }
    }
}

impl core::error::Error for Error {}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Error {
        Error::Randomness
    }
}

#[cfg(feature = "dsa")]
impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
