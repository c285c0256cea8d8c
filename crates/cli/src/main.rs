use anyhow::Context;
use clap::Parser;
use ferrous_resolver_domain::CliOverrides;
use std::io::Write;
use tracing::{error, info};

mod bootstrap;
mod commands;
mod di;

use commands::CommandRunner;

#[derive(Parser)]
#[command(name = "ferrous-resolver")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Resolver - iterative DNS resolver driven by a command file")]
struct Cli {
    /// Command file: `resolve <domain> <type>`, `print cache`, `quit`
    #[arg(value_name = "COMMAND_FILE")]
    command_file: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-nameserver query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Recursive server used to learn the root hints (repeatable)
    #[arg(long = "bootstrap-server", value_name = "HOST:PORT")]
    bootstrap_servers: Vec<String>,

    /// Do not set the DNSSEC OK bit on outgoing queries
    #[arg(long)]
    no_dnssec: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        query_timeout_ms: cli.timeout_ms,
        dnssec_ok: cli.no_dnssec.then_some(false),
        bootstrap_servers: cli.bootstrap_servers.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!("Starting Ferrous Resolver v{}", env!("CARGO_PKG_VERSION"));

    let script = tokio::fs::read_to_string(&cli.command_file)
        .await
        .with_context(|| format!("cannot read command file '{}'", cli.command_file))?;

    let services = di::ResolverServices::new(&config);

    match services.seed_root_hints.execute().await {
        Ok(count) => info!(nameservers = count, "Root hints ready"),
        Err(e) => {
            error!(error = %e, "Cannot start without root hints");
            return Err(e).context("bootstrap failed");
        }
    }

    let stdout = std::io::stdout();
    let mut runner = CommandRunner::new(services, stdout.lock());
    runner.run_script(&script).await?;
    runner.into_output().flush()?;

    info!("Command file finished");
    Ok(())
}
