//! Address parsing options
//!
//! This module provides configuration for [`parse_address_with`], covering
//! the port to use when the text has none and dual-stack normalisation.
//!
//! [`parse_address_with`]: crate::parse::parse_address_with

/// Options controlling how address text is turned into a [`SockAddr`].
///
/// # Examples
///
/// ```
/// use addrkit_core::options::ParseOptions;
///
/// let opts = ParseOptions::default()
///     .with_default_port(5075)
///     .with_map_ipv4_to_ipv6(true);
/// assert_eq!(opts.default_port, 5075);
/// ```
///
/// [`SockAddr`]: crate::SockAddr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Port used when the text carries none.
    ///
    /// - Default: 0 (no port)
    pub default_port: u16,

    /// Convert IPv4 results to their IPv4-mapped IPv6 form.
    ///
    /// - `false` (default): keep the parsed family
    /// - `true`: `1.2.3.4:80` yields `[::ffff:1.2.3.4]:80`, for callers
    ///   holding a single dual-stack IPv6 socket
    pub map_ipv4_to_ipv6: bool,
}

impl ParseOptions {
    /// Create options with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_port: 0,
            map_ipv4_to_ipv6: false,
        }
    }

    /// Set the port used when the text carries none.
    #[must_use]
    pub const fn with_default_port(mut self, port: u16) -> Self {
        self.default_port = port;
        self
    }

    /// Enable or disable IPv4 to IPv6 mapping of results.
    #[must_use]
    pub const fn with_map_ipv4_to_ipv6(mut self, map: bool) -> Self {
        self.map_ipv4_to_ipv6 = map;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert_eq!(opts.default_port, 0);
        assert!(!opts.map_ipv4_to_ipv6);
        assert_eq!(opts, ParseOptions::new());
    }

    #[test]
    fn test_builder() {
        let opts = ParseOptions::new()
            .with_default_port(80)
            .with_map_ipv4_to_ipv6(true);
        assert_eq!(opts.default_port, 80);
        assert!(opts.map_ipv4_to_ipv6);
    }
}
