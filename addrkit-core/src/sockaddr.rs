//! Socket address value type.
//!
//! [`SockAddr`] holds an IPv4 endpoint, an IPv6 endpoint, or nothing at all,
//! and reports the byte size of the native record (`sockaddr_in`,
//! `sockaddr_in6`, `sockaddr_storage`) it stands in for. The family is fixed
//! when the value is built; only the port may change afterwards.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error::{AddrError, Result};
use crate::family::Family;
use crate::native;

/// Tagged storage. Only the port may be mutated once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub(crate) enum Repr {
    #[default]
    Unspecified,
    Inet {
        addr: Ipv4Addr,
        port: u16,
    },
    Inet6 {
        addr: Ipv6Addr,
        port: u16,
        scope_id: u32,
    },
}

/// An IPv4, IPv6 or unspecified socket address.
///
/// Values are plain data: `Copy`, compared and hashed by value, and ordered
/// by family, then address, then port, then scope id.
///
/// # Examples
///
/// ```
/// use addrkit_core::{Family, SockAddr};
///
/// let addr = SockAddr::parse("127.0.0.1", 5075).unwrap();
/// assert_eq!(addr.family(), Family::Inet);
/// assert_eq!(addr.port(), 5075);
/// assert!(addr.is_loopback());
/// assert_eq!(addr.to_string(), "127.0.0.1:5075");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SockAddr(pub(crate) Repr);

// Constructors
impl SockAddr {
    /// An unspecified address (`AF_UNSPEC`).
    pub const UNSPECIFIED: Self = Self(Repr::Unspecified);

    /// Create an all-zero address of the given family with port 0.
    #[must_use]
    pub const fn new(family: Family) -> Self {
        match family {
            Family::Unspecified => Self::UNSPECIFIED,
            Family::Inet => Self::v4(Ipv4Addr::UNSPECIFIED, 0),
            Family::Inet6 => Self::v6(Ipv6Addr::UNSPECIFIED, 0, 0),
        }
    }

    /// Like [`SockAddr::new`], from a raw platform family value.
    ///
    /// # Errors
    ///
    /// Returns [`AddrError::UnsupportedFamily`] for anything other than
    /// `AF_UNSPEC`, `AF_INET` or `AF_INET6`.
    pub fn from_raw_family(raw: i32) -> Result<Self> {
        Family::try_from(raw).map(Self::new)
    }

    /// Create an IPv4 address.
    #[must_use]
    pub const fn v4(addr: Ipv4Addr, port: u16) -> Self {
        Self(Repr::Inet { addr, port })
    }

    /// Create an IPv6 address.
    #[must_use]
    pub const fn v6(addr: Ipv6Addr, port: u16, scope_id: u32) -> Self {
        Self(Repr::Inet6 {
            addr,
            port,
            scope_id,
        })
    }

    /// The wildcard address of `family` (`0.0.0.0` or `::`) with `port`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrError::UnsupportedFamily`] unless `family` is IPv4 or
    /// IPv6.
    pub fn any(family: Family, port: u16) -> Result<Self> {
        match family {
            Family::Inet => Ok(Self::v4(Ipv4Addr::UNSPECIFIED, port)),
            Family::Inet6 => Ok(Self::v6(Ipv6Addr::UNSPECIFIED, port, 0)),
            Family::Unspecified => Err(AddrError::UnsupportedFamily(family.raw())),
        }
    }

    /// The loopback address of `family` (`127.0.0.1` or `::1`) with `port`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrError::UnsupportedFamily`] unless `family` is IPv4 or
    /// IPv6.
    pub fn loopback(family: Family, port: u16) -> Result<Self> {
        match family {
            Family::Inet => Ok(Self::v4(Ipv4Addr::LOCALHOST, port)),
            Family::Inet6 => Ok(Self::v6(Ipv6Addr::LOCALHOST, port, 0)),
            Family::Unspecified => Err(AddrError::UnsupportedFamily(family.raw())),
        }
    }

    /// [`SockAddr::any`] taking a raw platform family value.
    pub fn any_raw(raw: i32, port: u16) -> Result<Self> {
        Self::any(Family::try_from(raw)?, port)
    }

    /// [`SockAddr::loopback`] taking a raw platform family value.
    pub fn loopback_raw(raw: i32, port: u16) -> Result<Self> {
        Self::loopback(Family::try_from(raw)?, port)
    }
}

// Accessors
impl SockAddr {
    #[inline]
    #[must_use]
    pub const fn family(&self) -> Family {
        match self.0 {
            Repr::Unspecified => Family::Unspecified,
            Repr::Inet { .. } => Family::Inet,
            Repr::Inet6 { .. } => Family::Inet6,
        }
    }

    /// Port in host byte order, 0 when unset or unspecified.
    #[inline]
    #[must_use]
    pub const fn port(&self) -> u16 {
        match self.0 {
            Repr::Unspecified => 0,
            Repr::Inet { port, .. } | Repr::Inet6 { port, .. } => port,
        }
    }

    /// IPv6 scope id, 0 for every other family.
    #[inline]
    #[must_use]
    pub const fn scope_id(&self) -> u32 {
        match self.0 {
            Repr::Inet6 { scope_id, .. } => scope_id,
            _ => 0,
        }
    }

    /// Byte length of the native record for this family.
    ///
    /// This is `sizeof(sockaddr_in)` for IPv4, `sizeof(sockaddr_in6)` for
    /// IPv6 and `sizeof(sockaddr_storage)` otherwise.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        native::record_size(self.family())
    }

    /// Assumes self is IPv4 and returns its address and port.
    ///
    /// # Panics
    /// Panics if self is not an IPv4 address.
    #[inline]
    #[track_caller]
    pub(crate) fn inet(&self) -> (Ipv4Addr, u16) {
        if let Repr::Inet { addr, port } = self.0 {
            (addr, port)
        } else {
            panic!("Cannot unwrap {} as an AF_INET address", self.family())
        }
    }

    /// Assumes self is IPv6 and returns its address, port and scope id.
    ///
    /// # Panics
    /// Panics if self is not an IPv6 address.
    #[inline]
    #[track_caller]
    pub(crate) fn inet6(&self) -> (Ipv6Addr, u16, u32) {
        if let Repr::Inet6 {
            addr,
            port,
            scope_id,
        } = self.0
        {
            (addr, port, scope_id)
        } else {
            panic!("Cannot unwrap {} as an AF_INET6 address", self.family())
        }
    }
}

// Family-aware predicates and transforms
impl SockAddr {
    /// Check for the wildcard address (`0.0.0.0` or `::`).
    #[must_use]
    pub fn is_any(&self) -> bool {
        match self.0 {
            Repr::Inet { addr, .. } => addr.is_unspecified(),
            Repr::Inet6 { addr, .. } => addr.is_unspecified(),
            Repr::Unspecified => false,
        }
    }

    /// Check for exactly `127.0.0.1` or `::1`.
    ///
    /// Other `127.0.0.0/8` addresses and the IPv4-mapped form
    /// `::ffff:127.0.0.1` are not considered loopback.
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        match self.0 {
            Repr::Inet { addr, .. } => addr == Ipv4Addr::LOCALHOST,
            Repr::Inet6 { addr, .. } => addr == Ipv6Addr::LOCALHOST,
            Repr::Unspecified => false,
        }
    }

    /// Check for `224.0.0.0/4` or `ff00::/8`.
    #[must_use]
    pub fn is_multicast(&self) -> bool {
        match self.0 {
            Repr::Inet { addr, .. } => addr.is_multicast(),
            Repr::Inet6 { addr, .. } => addr.is_multicast(),
            Repr::Unspecified => false,
        }
    }

    /// Convert an IPv4 address to its IPv4-mapped IPv6 form (`::ffff:a.b.c.d`).
    ///
    /// The port is kept and the scope id is 0. IPv6 addresses are returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AddrError::InvalidFamily`] for an unspecified address.
    pub fn map4to6(&self) -> Result<Self> {
        match self.family() {
            Family::Inet => {
                let (addr, port) = self.inet();
                Ok(Self::v6(addr.to_ipv6_mapped(), port, 0))
            }
            Family::Inet6 => Ok(*self),
            Family::Unspecified => Err(AddrError::InvalidFamily(Family::Unspecified)),
        }
    }

    /// Replace the port.
    ///
    /// # Errors
    ///
    /// Returns [`AddrError::InvalidState`] for an unspecified address, which
    /// has no port field.
    pub fn set_port(&mut self, new_port: u16) -> Result<()> {
        match &mut self.0 {
            Repr::Inet { port, .. } | Repr::Inet6 { port, .. } => {
                *port = new_port;
                Ok(())
            }
            Repr::Unspecified => Err(AddrError::InvalidState("set family before port")),
        }
    }
}
