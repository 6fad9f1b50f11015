//! Address text parsing.
//!
//! Accepted forms:
//!
//! ```text
//! addr  := ipv4 | ipv4 ':' port | ipv6 | '[' ipv6 ']' | '[' ipv6 ']' ':' port
//! port  := decimal | 0x-prefixed hex | 0-prefixed octal, in 0..=65535
//! ```
//!
//! The notation is picked from the positions of the first and last colon and
//! of the bracket pair. A bare string with two or more colons is an IPv6
//! literal without a port, so `::1` never loses its last group to the port.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{AddrError, Result};
use crate::escape::escape;
use crate::family::Family;
use crate::options::ParseOptions;
use crate::parse_int::parse_to;
use crate::sockaddr::SockAddr;

/// Longest IPv4 presentation form (`INET_ADDRSTRLEN - 1`).
pub const MAX_IPV4_TEXT_LEN: usize = 15;

/// Longest IPv6 presentation form (`INET6_ADDRSTRLEN - 1`).
pub const MAX_IPV6_TEXT_LEN: usize = 45;

/// Parse `input`, using `default_port` when it carries no port.
///
/// # Errors
///
/// Returns [`AddrError::InvalidFormat`] for mismatched brackets, an
/// over-long or malformed address literal, a malformed port, or a port above
/// 65535.
///
/// # Examples
///
/// ```
/// use addrkit_core::parse_address;
///
/// let addr = parse_address("[::1]:5075", 0).unwrap();
/// assert!(addr.is_loopback());
/// assert_eq!(addr.port(), 5075);
///
/// let addr = parse_address("::1", 5075).unwrap();
/// assert_eq!(addr.port(), 5075);
///
/// assert!(parse_address("[::1", 0).is_err());
/// ```
pub fn parse_address(input: &str, default_port: u16) -> Result<SockAddr> {
    parse_address_with(input, &ParseOptions::new().with_default_port(default_port))
}

/// Parse `input` according to `opts`.
///
/// # Errors
///
/// Same as [`parse_address`].
pub fn parse_address_with(input: &str, opts: &ParseOptions) -> Result<SockAddr> {
    let Notation {
        family,
        addr_text,
        port_text,
    } = split(input)?;
    trace!("[PARSE] {} split as {} {:?} port {:?}", escape(input), family, addr_text, port_text);

    let max_len = match family {
        Family::Inet6 => MAX_IPV6_TEXT_LEN,
        _ => MAX_IPV4_TEXT_LEN,
    };
    if addr_text.len() > max_len {
        let reason = match family {
            Family::Inet6 => "IPv6 address too long",
            _ => "IPv4 address too long",
        };
        return Err(reject(reason, input));
    }

    let mut addr = match family {
        Family::Inet6 => {
            let ip = Ipv6Addr::from_str(addr_text)
                .map_err(|_| reject("Not a valid IP address", input))?;
            SockAddr::v6(ip, 0, 0)
        }
        _ => {
            let ip = Ipv4Addr::from_str(addr_text)
                .map_err(|_| reject("Not a valid IP address", input))?;
            SockAddr::v4(ip, 0)
        }
    };

    let port = match port_text {
        Some(text) => parse_port(text, input)?,
        None => opts.default_port,
    };
    addr.set_port(port)?;

    if opts.map_ipv4_to_ipv6 {
        addr.map4to6()
    } else {
        Ok(addr)
    }
}

/// Pieces of the input picked out by bracket and colon positions.
#[derive(Debug, PartialEq, Eq)]
struct Notation<'a> {
    family: Family,
    addr_text: &'a str,
    port_text: Option<&'a str>,
}

fn split(input: &str) -> Result<Notation<'_>> {
    let first_colon = input.find(':');
    let last_colon = input.rfind(':');
    let open = input.find('[');
    let close = input.rfind(']');

    match (open, close, first_colon) {
        // no brackets, plain ipv4
        (None, None, None) => Ok(Notation {
            family: Family::Inet,
            addr_text: input,
            port_text: None,
        }),
        // single colon, ipv4 with port
        (None, None, Some(colon)) if last_colon == Some(colon) => Ok(Notation {
            family: Family::Inet,
            addr_text: &input[..colon],
            port_text: Some(&input[colon + 1..]),
        }),
        // several colons, bare ipv6
        (None, None, Some(_)) => Ok(Notation {
            family: Family::Inet6,
            addr_text: input,
            port_text: None,
        }),
        (Some(open), Some(close), _) if open < close => {
            let port_text = match last_colon {
                Some(colon) if colon > close => Some(&input[colon + 1..]),
                _ => None,
            };
            Ok(Notation {
                family: Family::Inet6,
                addr_text: &input[open + 1..close],
                port_text,
            })
        }
        _ => Err(reject("IPv6 with mismatched brackets", input)),
    }
}

fn parse_port(text: &str, input: &str) -> Result<u16> {
    let value = parse_to::<u64>(text).map_err(|err| {
        debug!("[PARSE] Bad port in {}: {}", escape(input), err);
        AddrError::invalid_format(format!("Invalid port in \"{}\": {err}", escape(input)))
    })?;
    u16::try_from(value).map_err(|_| reject("Port out of range", input))
}

fn reject(reason: &str, input: &str) -> AddrError {
    debug!("[PARSE] Rejecting {}: {}", escape(input), reason);
    AddrError::invalid_format(format!("{reason} \"{}\"", escape(input)))
}

impl SockAddr {
    /// Parse `input`, using `default_port` when it carries no port.
    ///
    /// See [`parse_address`].
    pub fn parse(input: &str, default_port: u16) -> Result<Self> {
        parse_address(input, default_port)
    }

    /// Replace self with the address parsed from `input`.
    ///
    /// On error self is left untouched.
    pub fn set_address(&mut self, input: &str, default_port: u16) -> Result<()> {
        *self = parse_address(input, default_port)?;
        Ok(())
    }
}

/// Parses with a default port of 0.
impl FromStr for SockAddr {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self> {
        parse_address(s, 0)
    }
}
