//! Environment-driven server configuration.

use std::env;
use std::path::PathBuf;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port, from `PORT`. Defaults to 3000.
    pub port: u16,
    /// Directory holding the prebuilt frontend bundle, from `STATIC_DIR`.
    /// Unset means API-only mode.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("STATIC_DIR").ok())
    }

    fn from_vars(port: Option<String>, static_dir: Option<String>) -> Self {
        let port = match port.as_deref() {
            None => 3000,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "PORT is not a valid port number, using 3000");
                3000
            }),
        };
        Self {
            port,
            static_dir: static_dir.map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.port, 3000);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn reads_port_and_static_dir() {
        let config = Config::from_vars(Some("8080".to_string()), Some("dist".to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
    }

    #[test]
    fn unparseable_port_falls_back_to_default() {
        let config = Config::from_vars(Some("not-a-port".to_string()), None);
        assert_eq!(config.port, 3000);
    }
}
