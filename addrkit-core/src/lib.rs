//! Addrkit Core
//!
//! This crate contains the socket address building blocks:
//! - IPv4 / IPv6 / unspecified address value (`sockaddr`)
//! - Address families and their native codes (`family`)
//! - Text parsing of `host`, `host:port`, `[v6]:port` notation (`parse`)
//! - Text rendering (`format`)
//! - Interop with `std::net` and `socket2` records (`native`)
//! - Strict integer parsing (`parse_int`) and text escaping (`escape`)
//! - Error types (`error`)
//!
//! Nothing here performs I/O.

#![cfg_attr(not(test), deny(unsafe_code))]
// Allow some pedantic lints that are intentional in this crate
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::match_same_arms)]
pub mod error;
pub mod escape;
pub mod family;
pub mod format;
pub mod native;
pub mod options;
pub mod parse;
pub mod parse_int;
pub mod sockaddr;

pub use error::{AddrError, Result};
pub use family::Family;
pub use parse::{parse_address, parse_address_with};
pub use sockaddr::SockAddr;

// Keep it minimal to avoid API lock-in.
pub mod prelude {
    pub use crate::error::{AddrError, Result};
    pub use crate::escape::escape;
    pub use crate::family::Family;
    pub use crate::native::display_native;
    pub use crate::options::ParseOptions;
    pub use crate::parse::{parse_address, parse_address_with};
    pub use crate::parse_int::{parse_to, NoConvert, ParseTo};
    pub use crate::sockaddr::SockAddr;
}
