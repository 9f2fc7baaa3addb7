//! Policy Portal - command-line binary
//!
//! # Usage
//!
//! ```bash
//! # List every policy
//! policy-portal list
//!
//! # Search and print JSON
//! policy-portal list --search honda --output json
//!
//! # Create, edit and delete
//! policy-portal create --beneficiary "John Doe" --brand Toyota --type Camry --tsi 25000 --rate 5
//! policy-portal edit POL-001 --rate 6
//! policy-portal delete POL-001
//! ```
//!
//! # Environment Variables
//!
//! * `PORTAL_API_URL` - Policy resource URL (default: http://localhost:5126/api/Policy)
//! * `PORTAL_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
//! * `PORTAL_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: warn)
//! * `PORTAL_CURRENCY` - List view currency (default: IDR)

use std::process::ExitCode;

use clap::Parser;
use interface_cli::{Cli, CliError, CliResult, Portal, PortalConfig, StdinConfirmation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = PortalConfig::from_env()
        .map_err(CliError::from)?
        .with_overrides(cli.api_url, cli.timeout);

    init_tracing(&config.log_level);
    tracing::debug!(?config, "Loaded configuration");

    let portal = Portal::from_config(&config, cli.output)?;
    let mut stdout = std::io::stdout().lock();
    portal.run(cli.command, &StdinConfirmation, &mut stdout).await
}

/// Initializes the tracing subscriber, logging to stderr so views stay clean.
///
/// # Arguments
///
/// * `log_level` - The filter used when `RUST_LOG` is unset
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
