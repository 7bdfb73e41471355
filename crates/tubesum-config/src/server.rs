use std::net::SocketAddr;

use serde::Deserialize;

/// Port used when neither the config nor `PORT` names one
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Explicit listen address; takes precedence over `PORT`
    pub listen_address: Option<SocketAddr>,
}

impl ServerConfig {
    /// Address the server should bind to
    ///
    /// Falls back to `0.0.0.0` on the port named by the `PORT` environment
    /// variable, or 8080 when it is unset or not a valid port.
    pub fn resolve_listen_address(&self) -> SocketAddr {
        if let Some(address) = self.listen_address {
            return address;
        }

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "ignoring invalid PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        SocketAddr::from(([0, 0, 0, 0], port))
    }
}
