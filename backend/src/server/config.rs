//! HTTP server configuration.

use std::net::SocketAddr;

/// Environment variable naming the listen address.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Configuration listening on the given address.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Read the configuration from the environment.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when `BIND_ADDR` is set but does not parse
    /// as a socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let raw = std::env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = raw
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid {BIND_ADDR_VAR} '{raw}': {err}")))?;
        Ok(Self::new(bind_addr))
    }

    /// The socket address the server binds to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_default_listen_address_parses() {
        let parsed: SocketAddr = DEFAULT_BIND_ADDR.parse().expect("valid default");
        assert_eq!(ServerConfig::new(parsed).bind_addr(), parsed);
    }
}
