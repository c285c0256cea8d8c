use serde::{Deserialize, Serialize};

/// Recursive servers asked once at startup for the root zone's nameservers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BootstrapConfig {
    /// `host:port` entries, tried in order. Hostnames are resolved by the system resolver.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_timeout_ms() -> u64 {
    5000
}
