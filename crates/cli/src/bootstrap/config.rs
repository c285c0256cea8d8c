use ferrous_resolver_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber exists, so the loaded values are visible.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        query_timeout_ms = config.resolver.query_timeout_ms,
        dnssec_ok = config.resolver.dnssec_ok,
        max_referrals = config.resolver.max_referrals,
        max_depth = config.resolver.max_depth,
        bootstrap_servers = ?config.bootstrap.servers,
        "Configuration loaded"
    );
}
