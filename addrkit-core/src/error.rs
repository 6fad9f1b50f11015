/// Addrkit Error Types
///
/// Errors raised while parsing, constructing or transforming socket addresses.

use thiserror::Error;

use crate::family::Family;

/// Main error type for address operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Malformed address text
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),

    /// Address family is neither IPv4 nor IPv6 (raw platform code)
    #[error("Unsupported address family: {0}")]
    UnsupportedFamily(i32),

    /// Operation needs a concrete family but the address is unspecified
    #[error("Invalid address state: {0}")]
    InvalidState(&'static str),

    /// Transform applied to an address of the wrong family
    #[error("Invalid address family: {0}")]
    InvalidFamily(Family),
}

/// Result type alias for address operations
pub type Result<T> = std::result::Result<T, AddrError>;

impl AddrError {
    /// Create an invalid format error with a message
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    /// Check if this error was caused by malformed input text
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }
}
