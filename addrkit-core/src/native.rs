//! Interop with native socket address records.
//!
//! Conversions between [`SockAddr`] and `std::net` / `socket2` types. The
//! record sizes reported by [`SockAddr::size`] are taken from `socket2` so
//! they always match what the platform's socket calls expect.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

use once_cell::sync::Lazy;

use crate::error::{AddrError, Result};
use crate::family::{Family, AF_UNSPEC};
use crate::format::UNKNOWN_ADDRESS;
use crate::sockaddr::{Repr, SockAddr};

/// Native record sizes, indexed by [`record_index`].
static RECORD_SIZES: Lazy<[usize; 3]> = Lazy::new(|| {
    let v4 = socket2::SockAddr::from(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));
    let v6 = socket2::SockAddr::from(SocketAddrV6::new(Ipv6Addr::UNSPECIFIED, 0, 0, 0));
    let storage = v4.clone().as_storage();
    [
        std::mem::size_of_val(&storage),
        v4.len() as usize,
        v6.len() as usize,
    ]
});

const fn record_index(family: Family) -> usize {
    match family {
        Family::Unspecified => 0,
        Family::Inet => 1,
        Family::Inet6 => 2,
    }
}

/// Byte length of the native record backing `family`.
pub(crate) fn record_size(family: Family) -> usize {
    RECORD_SIZES[record_index(family)]
}

impl SockAddr {
    /// The IP address, if any.
    #[must_use]
    pub fn ip(&self) -> Option<IpAddr> {
        match self.0 {
            Repr::Unspecified => None,
            Repr::Inet { addr, .. } => Some(IpAddr::V4(addr)),
            Repr::Inet6 { addr, .. } => Some(IpAddr::V6(addr)),
        }
    }

    /// Convert to a standard library address. `None` when unspecified.
    #[must_use]
    pub fn to_socket_addr(&self) -> Option<SocketAddr> {
        match self.0 {
            Repr::Unspecified => None,
            Repr::Inet { addr, port } => Some(SocketAddr::V4(SocketAddrV4::new(addr, port))),
            Repr::Inet6 {
                addr,
                port,
                scope_id,
            } => Some(SocketAddr::V6(SocketAddrV6::new(addr, port, 0, scope_id))),
        }
    }

    /// Convert to a `socket2` address, ready to hand to socket calls.
    ///
    /// `None` when unspecified. The returned record's `len()` equals
    /// [`SockAddr::size`].
    #[must_use]
    pub fn to_socket2(&self) -> Option<socket2::SockAddr> {
        self.to_socket_addr().map(socket2::SockAddr::from)
    }
}

impl From<SocketAddrV4> for SockAddr {
    fn from(addr: SocketAddrV4) -> Self {
        Self::v4(*addr.ip(), addr.port())
    }
}

/// Flow info is not represented and is dropped.
impl From<SocketAddrV6> for SockAddr {
    fn from(addr: SocketAddrV6) -> Self {
        Self::v6(*addr.ip(), addr.port(), addr.scope_id())
    }
}

impl From<SocketAddr> for SockAddr {
    fn from(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(v4) => v4.into(),
            SocketAddr::V6(v6) => v6.into(),
        }
    }
}

/// Port 0.
impl From<IpAddr> for SockAddr {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Self::v4(v4, 0),
            IpAddr::V6(v6) => Self::v6(v6, 0, 0),
        }
    }
}

impl TryFrom<&socket2::SockAddr> for SockAddr {
    type Error = AddrError;

    fn try_from(addr: &socket2::SockAddr) -> Result<Self> {
        if let Some(std_addr) = addr.as_socket() {
            return Ok(std_addr.into());
        }
        let raw = i32::from(addr.family());
        if raw == AF_UNSPEC {
            Ok(Self::UNSPECIFIED)
        } else {
            Err(AddrError::UnsupportedFamily(raw))
        }
    }
}

/// Display adapter returned by [`display_native`].
#[derive(Debug, Clone, Copy)]
pub struct NativeDisplay<'a>(&'a socket2::SockAddr);

/// Render a raw native record the same way [`SockAddr`] is rendered.
///
/// Records of a family [`SockAddr`] cannot hold (for example `AF_UNIX`)
/// render as `<???>` instead of failing.
pub fn display_native(addr: &socket2::SockAddr) -> NativeDisplay<'_> {
    NativeDisplay(addr)
}

impl fmt::Display for NativeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match SockAddr::try_from(self.0) {
            Ok(addr) => fmt::Display::fmt(&addr, f),
            Err(_) => f.write_str(UNKNOWN_ADDRESS),
        }
    }
}
