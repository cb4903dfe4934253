//! Error type for the FourQ engine.
//!
//! Arithmetic functions report their outcome with `u32` masks; protocol
//! entry points, point decoding wrappers and validating multiplications
//! return a `Result` with this error type.

use core::fmt;

/// Status of a failed operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Generic failure (including a failure of the hash function).
    Generic,
    /// Failure during a test.
    DuringTest,
    /// Unknown failure.
    Unknown,
    /// Functionality not implemented.
    NotImplemented,
    /// Scratch memory could not be allocated.
    NoMemory,
    /// Malformed input (e.g. a reserved bit is set).
    InvalidParameter,
    /// A point is not on the curve.
    InvalidPoint,
    /// No curve point matches the encoded value.
    Decoding,
    /// Key agreement yielded the neutral point.
    SharedKey,
    /// A signature did not verify.
    SignatureVerification,
    /// The random source failed.
    Random,
}

impl Error {

    /// Gets a human-readable description of this error.
    pub fn message(self) -> &'static str {
        match self {
            Error::Generic => "Generic error",
            Error::DuringTest => "Error during test",
            Error::Unknown => "Unknown error",
            Error::NotImplemented => "Not implemented",
            Error::NoMemory => "Insufficient memory",
            Error::InvalidParameter => "Invalid parameter",
            Error::InvalidPoint => "Invalid point",
            Error::Decoding => "Point decoding failed",
            Error::SharedKey => "Shared key is the neutral point",
            Error::SignatureVerification => "Signature verification failed",
            Error::Random => "Random source failed",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<rand_core::Error> for Error {
    fn from(_: rand_core::Error) -> Self {
        Error::Random
    }
}

/// Result type of fallible operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {

    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(Error::InvalidPoint.message(), "Invalid point");
        assert_eq!(format!("{}", Error::SharedKey),
            "Shared key is the neutral point");
        let code = core::num::NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
        let e: Error = rand_core::Error::from(code).into();
        assert_eq!(e, Error::Random);
    }
}
