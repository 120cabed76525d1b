// src/config/mod.rs
// Server configuration: defaults, config file, environment and CLI overrides

pub mod file;

use serde::Serialize;

pub use file::{AuraConfig, ServerSection};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// Resolved settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origin; `None` allows any
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: None,
        }
    }
}

/// Values supplied on the command line or via environment (clap merges both)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    /// Resolve values: overrides > config file > defaults
    pub fn resolve(overrides: Overrides, file: &AuraConfig) -> Self {
        let defaults = Self::default();
        let server = &file.server;

        let cors_origin = overrides
            .cors_origin
            .or_else(|| server.cors_origin.clone())
            .filter(|origin| {
                let origin = origin.trim();
                !origin.is_empty() && origin != "*"
            });

        Self {
            host: overrides
                .host
                .or_else(|| server.host.clone())
                .unwrap_or(defaults.host),
            port: overrides.port.or(server.port).unwrap_or(defaults.port),
            cors_origin,
        }
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(host: Option<&str>, port: Option<u16>, cors: Option<&str>) -> AuraConfig {
        AuraConfig {
            server: ServerSection {
                host: host.map(String::from),
                port,
                cors_origin: cors.map(String::from),
            },
        }
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::resolve(Overrides::default(), &AuraConfig::default());
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_file_beats_defaults() {
        let file = file_config(Some("0.0.0.0"), Some(9000), Some("http://localhost:3000"));
        let config = ServerConfig::resolve(Overrides::default(), &file);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_overrides_beat_file() {
        let file = file_config(Some("0.0.0.0"), Some(9000), None);
        let overrides = Overrides {
            host: None,
            port: Some(7000),
            cors_origin: Some("https://aura.app".to_string()),
        };
        let config = ServerConfig::resolve(overrides, &file);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7000);
        assert_eq!(config.cors_origin.as_deref(), Some("https://aura.app"));
    }

    #[test]
    fn test_wildcard_origin_means_any() {
        let overrides = Overrides {
            cors_origin: Some("*".to_string()),
            ..Default::default()
        };
        let file = file_config(None, None, Some("http://localhost:3000"));
        let config = ServerConfig::resolve(overrides, &file);
        assert_eq!(config.cors_origin, None);
    }
}
