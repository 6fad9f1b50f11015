//! Text rendering of socket addresses.
//!
//! Formatting is total: every [`SockAddr`] has a rendition.
//!
//! | Family | Rendition |
//! |--------|-----------|
//! | IPv4 | `a.b.c.d`, then `:port` if the port is non-zero |
//! | IPv6 | `[colon-hex]`, then `%scope` and `:port` if non-zero |
//! | Unspecified | `<>` |
//!
//! Native records of any other family render as [`UNKNOWN_ADDRESS`] (see
//! [`display_native`](crate::native::display_native)).

use std::fmt;

use crate::family::Family;
use crate::sockaddr::SockAddr;

/// Rendition of an address with no family.
pub const UNSPECIFIED_ADDRESS: &str = "<>";

/// Rendition of an address whose family cannot be represented.
pub const UNKNOWN_ADDRESS: &str = "<???>";

impl fmt::Display for SockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family() {
            Family::Inet => {
                let (addr, port) = self.inet();
                write!(f, "{addr}")?;
                if port != 0 {
                    write!(f, ":{port}")?;
                }
            }
            Family::Inet6 => {
                let (addr, port, scope_id) = self.inet6();
                write!(f, "[{addr}]")?;
                if scope_id != 0 {
                    write!(f, "%{scope_id}")?;
                }
                if port != 0 {
                    write!(f, ":{port}")?;
                }
            }
            Family::Unspecified => f.write_str(UNSPECIFIED_ADDRESS)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_format_ipv4() {
        assert_eq!(SockAddr::v4(Ipv4Addr::new(127, 0, 0, 1), 0).to_string(), "127.0.0.1");
        assert_eq!(
            SockAddr::v4(Ipv4Addr::new(10, 20, 30, 40), 5075).to_string(),
            "10.20.30.40:5075"
        );
    }

    #[test]
    fn test_format_ipv6() {
        assert_eq!(SockAddr::v6(Ipv6Addr::LOCALHOST, 0, 0).to_string(), "[::1]");
        assert_eq!(SockAddr::v6(Ipv6Addr::LOCALHOST, 5075, 0).to_string(), "[::1]:5075");
        assert_eq!(SockAddr::v6(Ipv6Addr::UNSPECIFIED, 0, 0).to_string(), "[::]");

        let link_local: Ipv6Addr = "fe80::1".parse().unwrap();
        assert_eq!(SockAddr::v6(link_local, 0, 2).to_string(), "[fe80::1]%2");
        assert_eq!(SockAddr::v6(link_local, 80, 2).to_string(), "[fe80::1]%2:80");
    }

    #[test]
    fn test_format_mapped() {
        let mapped = SockAddr::v4(Ipv4Addr::new(1, 2, 3, 4), 9).map4to6().unwrap();
        assert_eq!(mapped.to_string(), "[::ffff:1.2.3.4]:9");
    }

    #[test]
    fn test_format_unspecified() {
        assert_eq!(SockAddr::UNSPECIFIED.to_string(), "<>");
    }
}
