//! Sender runtime configuration.

use std::env;

/// Environment variable overriding the daemon host.
pub const HOST_ENV: &str = "OTPAD_HOST";

/// Default daemon host.
pub const DEFAULT_HOST: &str = "localhost";

/// Runtime settings for one sender invocation.
#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// Host the daemon runs on.
    pub host: String,

    /// TCP port the daemon listens on.
    pub port: u16,
}

impl SenderConfig {
    /// Creates a config for `port` with the default host.
    pub fn new(port: u16) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port,
        }
    }

    /// Creates a config for `port`, honoring `OTPAD_HOST` when set and
    /// non-empty.
    pub fn from_env(port: u16) -> Self {
        let mut config = Self::new(port);
        if let Ok(host) = env::var(HOST_ENV) {
            if !host.is_empty() {
                config.host = host;
            }
        }
        config
    }
}
