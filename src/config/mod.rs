// Configuration module entry point
// Manages application configuration and process-wide state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from the default "config.toml" file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    /// Missing files fall back to the built-in defaults below
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("AGENTLINK"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "AgentLink-Demo/3.0")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3001);
        assert!(cfg.server.workers.is_none());
        assert!(!cfg.logging.access_log);
        assert_eq!(cfg.http.server_name, "AgentLink-Demo/3.0");
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 3001);
    }
}
