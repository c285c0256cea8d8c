use serde::{Deserialize, Serialize};

use super::bootstrap::BootstrapConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-resolver.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-resolver/config.toml";

/// Main configuration structure for Ferrous Resolver
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Iterative resolution configuration
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Root hint bootstrap configuration
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-resolver.toml in current directory
    /// 3. /etc/ferrous-resolver/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(dnssec_ok) = overrides.dnssec_ok {
            self.resolver.dnssec_ok = dnssec_ok;
        }
        if !overrides.bootstrap_servers.is_empty() {
            self.bootstrap.servers = overrides.bootstrap_servers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.nameserver_port == 0 {
            return Err(ConfigError::Validation(
                "Nameserver port cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_referrals == 0 {
            return Err(ConfigError::Validation(
                "max_referrals must be at least 1".to_string(),
            ));
        }

        if self.resolver.max_depth == 0 {
            return Err(ConfigError::Validation(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if self.bootstrap.servers.is_empty() {
            return Err(ConfigError::Validation(
                "No bootstrap servers configured".to_string(),
            ));
        }

        if self.bootstrap.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Bootstrap timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_timeout_ms: Option<u64>,
    pub dnssec_ok: Option<bool>,
    pub bootstrap_servers: Vec<String>,
    pub log_level: Option<String>,
}
