use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing or cannot be represented.
    InvalidArgument(&'static str),
    /// A key function was asked for a position its backing sequence does not have.
    OutOfBounds { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
            Error::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for sequence of length {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
