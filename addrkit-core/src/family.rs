//! Address family enumeration.
//!
//! This module provides the `Family` enum which tags every socket address
//! with the native address family it maps to (`AF_UNSPEC`, `AF_INET`,
//! `AF_INET6`).

use std::fmt;

use socket2::Domain;

use crate::error::AddrError;

/// Raw value of `AF_UNSPEC`, identical on every supported platform.
pub const AF_UNSPEC: i32 = 0;

/// Socket address families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Family {
    /// No address family selected yet
    #[default]
    Unspecified,

    /// IPv4 (`AF_INET`)
    Inet,

    /// IPv6 (`AF_INET6`)
    Inet6,
}

impl Family {
    /// Get the family as its C constant name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "AF_UNSPEC",
            Self::Inet => "AF_INET",
            Self::Inet6 => "AF_INET6",
        }
    }

    /// Raw platform value of this family.
    #[must_use]
    pub fn raw(&self) -> i32 {
        match self.domain() {
            Some(domain) => domain.into(),
            None => AF_UNSPEC,
        }
    }

    /// The `socket2` domain for this family, if it has one.
    #[must_use]
    pub const fn domain(&self) -> Option<Domain> {
        match self {
            Self::Unspecified => None,
            Self::Inet => Some(Domain::IPV4),
            Self::Inet6 => Some(Domain::IPV6),
        }
    }

    /// Check if this family carries an IP address.
    #[must_use]
    pub const fn is_ip(&self) -> bool {
        matches!(self, Self::Inet | Self::Inet6)
    }
}

impl TryFrom<i32> for Family {
    type Error = AddrError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        if raw == AF_UNSPEC {
            Ok(Self::Unspecified)
        } else if raw == i32::from(Domain::IPV4) {
            Ok(Self::Inet)
        } else if raw == i32::from(Domain::IPV6) {
            Ok(Self::Inet6)
        } else {
            Err(AddrError::UnsupportedFamily(raw))
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
