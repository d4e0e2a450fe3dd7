//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::transport::TransportConfig;

/// User agent sent on every outbound HTTP request.
pub const USER_AGENT: &str = "ma-beach-agent/1.0";

/// Default closure dataset file, resolved from the process working directory.
pub const DEFAULT_DATASET_PATH: &str = "ClosureTable_data.csv";

/// Default public geocoding endpoint.
pub const DEFAULT_GEOCODER_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default tide-prediction endpoint.
pub const DEFAULT_TIDE_BASE_URL: &str = "https://api.marea.ooo";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Closure dataset location.
    pub dataset: DatasetConfig,

    /// Third-party marine service endpoints.
    pub marine: MarineConfig,

    /// External API credentials.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Closure dataset configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the closure CSV file. Relative paths resolve from the
    /// process working directory.
    pub path: PathBuf,
}

/// Configuration for the geocoding and tide services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarineConfig {
    /// Base URL of the geocoding service.
    pub geocoder_base_url: String,

    /// Base URL of the tide-prediction service.
    pub tide_base_url: String,

    /// User agent identifying this server to the upstream services.
    pub user_agent: String,

    /// Per-request timeout, in seconds.
    pub timeout_secs: u64,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Marea API token for tide predictions.
    /// Get a key at: https://marea.ooo
    pub marea_api_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "marea_api_token",
                &self.marea_api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
        }
    }
}

impl Default for MarineConfig {
    fn default() -> Self {
        Self {
            geocoder_base_url: DEFAULT_GEOCODER_BASE_URL.to_string(),
            tide_base_url: DEFAULT_TIDE_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            marea_api_token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "MA Beach Agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            dataset: DatasetConfig::default(),
            marine: MarineConfig::default(),
            credentials: CredentialsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server variables are prefixed with `MCP_`; the tide token keeps its
    /// externally-contracted name `MAREA_API_TOKEN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(path) = std::env::var("MCP_DATASET_PATH") {
            config.dataset.path = PathBuf::from(path);
        }

        if let Ok(url) = std::env::var("MCP_GEOCODER_BASE_URL") {
            config.marine.geocoder_base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_TIDE_BASE_URL") {
            config.marine.tide_base_url = url;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        // Load the Marea API token
        if let Ok(token) = std::env::var("MAREA_API_TOKEN") {
            config.credentials.marea_api_token = Some(token);
            info!("Marea API token loaded from environment");
        } else {
            warn!(
                "MAREA_API_TOKEN not set - tide requests will be sent with an \
                 empty token and the tide service will likely reject them"
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MAREA_API_TOKEN", "test_token_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.marea_api_token.as_deref(),
            Some("test_token_12345")
        );
        unsafe {
            std::env::remove_var("MAREA_API_TOKEN");
        }
    }

    #[test]
    fn test_credentials_absent_by_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MAREA_API_TOKEN");
        }
        let config = Config::from_env();
        assert!(config.credentials.marea_api_token.is_none());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            marea_api_token: Some("super_secret_token".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }

    #[test]
    fn test_dataset_path_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DATASET_PATH", "/tmp/closures.csv");
        }
        let config = Config::from_env();
        assert_eq!(config.dataset.path, PathBuf::from("/tmp/closures.csv"));
        unsafe {
            std::env::remove_var("MCP_DATASET_PATH");
        }
    }

    #[test]
    fn test_default_dataset_path_is_relative() {
        let config = Config::default();
        assert!(config.dataset.path.is_relative());
        assert_eq!(config.dataset.path, PathBuf::from(DEFAULT_DATASET_PATH));
    }

    #[test]
    fn test_default_marine_endpoints() {
        let marine = MarineConfig::default();
        assert_eq!(marine.user_agent, "ma-beach-agent/1.0");
        assert_eq!(marine.timeout_secs, 10);
        assert!(marine.geocoder_base_url.starts_with("https://"));
        assert!(marine.tide_base_url.starts_with("https://"));
    }
}
