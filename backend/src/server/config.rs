//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, a configuration file, `BANK_*`
//! environment variables, and command-line flags.

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Network settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BANK")]
pub struct ServerSettings {
    /// Interface to bind to.
    pub host: Option<String>,
    /// TCP port to listen on.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Socket address the server binds to.
    ///
    /// IP literals are used as-is, with or without IPv6 brackets. Anything
    /// else is resolved and the first address wins.
    ///
    /// # Errors
    /// Returns an I/O error when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let host = self.host();
        let literal = host.trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = literal.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }
        (host, self.port).to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("host {host} resolved to no addresses"),
            )
        })
    }
}
