//! Daemon runtime configuration.

use std::env;

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "OTPAD_BIND";

/// Default bind address.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Pending-connection backlog for the listening socket.
pub const DEFAULT_BACKLOG: u32 = 5;

/// Runtime settings for one daemon process.
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// TCP port to listen on. 0 asks the kernel for an ephemeral port.
    pub port: u16,

    /// Address to bind.
    pub bind_host: String,

    /// Listen backlog.
    pub backlog: u32,

    /// Cap on simultaneous sessions. `None` means unbounded.
    pub max_sessions: Option<usize>,
}

impl DaemonConfig {
    /// Creates a config for `port` with defaults for everything else.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            bind_host: DEFAULT_BIND_HOST.to_string(),
            backlog: DEFAULT_BACKLOG,
            max_sessions: None,
        }
    }

    /// Creates a config for `port`, honoring `OTPAD_BIND` when set and
    /// non-empty.
    pub fn from_env(port: u16) -> Self {
        let mut config = Self::new(port);
        if let Ok(bind) = env::var(BIND_ENV) {
            if !bind.is_empty() {
                config.bind_host = bind;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::new(57171);
        assert_eq!(config.port, 57171);
        assert_eq!(config.bind_host, DEFAULT_BIND_HOST);
        assert_eq!(config.backlog, 5);
        assert!(config.max_sessions.is_none());
    }

    #[test]
    fn test_from_env_override() {
        env::set_var(BIND_ENV, "127.0.0.1");
        let config = DaemonConfig::from_env(57171);
        env::remove_var(BIND_ENV);

        assert_eq!(config.bind_host, "127.0.0.1");
    }
}
