//! # Addrkit
//!
//! Socket address values for protocol code that needs to bind, compare and
//! log IPv4 and IPv6 endpoints without doing any I/O itself.
//!
//! ## Architecture
//!
//! - **`addrkit-core`**: address value, family predicates, parser, formatter,
//!   native record interop
//! - **`addrkit`**: Public API surface (this crate)
//!
//! ## Quick Start
//!
//! ```rust
//! use addrkit::prelude::*;
//!
//! # fn example() -> Result<()> {
//! // Port from the text wins over the default
//! let server = parse_address("127.0.0.1:5076", 5075)?;
//! assert_eq!(server.port(), 5076);
//!
//! // Bare IPv6 literals take the default port
//! let local = parse_address("::1", 5075)?;
//! assert!(local.is_loopback());
//! assert_eq!(local.to_string(), "[::1]:5075");
//!
//! // Dual-stack sockets want everything as IPv6
//! let mapped = server.map4to6()?;
//! assert_eq!(mapped.to_string(), "[::ffff:127.0.0.1]:5076");
//!
//! // Wildcard bind address
//! let bind = SockAddr::any(Family::Inet6, 5075)?;
//! assert!(bind.is_any());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Notation
//!
//! | Text | Family | Port |
//! |------|--------|------|
//! | `1.2.3.4` | IPv4 | default |
//! | `1.2.3.4:80` | IPv4 | 80 |
//! | `fe80::1` | IPv6 | default |
//! | `[fe80::1]` | IPv6 | default |
//! | `[fe80::1]:0x50` | IPv6 | 80 |
//!
//! ## Safety
//!
//! - No `unsafe` code
//! - Values are `Copy` and `Send + Sync`; parsing and formatting are pure

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dev_tracing;

// Re-export core types
pub use addrkit_core::error::{AddrError, Result};
pub use addrkit_core::escape::{escape, Escaped};
pub use addrkit_core::family::{Family, AF_UNSPEC};
pub use addrkit_core::format::{UNKNOWN_ADDRESS, UNSPECIFIED_ADDRESS};
pub use addrkit_core::native::{display_native, NativeDisplay};
pub use addrkit_core::options::ParseOptions;
pub use addrkit_core::parse::{
    parse_address, parse_address_with, MAX_IPV4_TEXT_LEN, MAX_IPV6_TEXT_LEN,
};
pub use addrkit_core::parse_int::{parse_to, NoConvert, ParseTo};
pub use addrkit_core::sockaddr::SockAddr;

/// Common imports.
pub mod prelude {
    pub use addrkit_core::prelude::*;
}
