//! Command-line definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

use core_kernel::{Currency, PolicyDate};

/// Manage auto-insurance policy records
#[derive(Debug, Parser)]
#[command(name = "policy-portal", version, about = "Manage auto-insurance policy records")]
pub struct Cli {
    /// URL of the backend's policy resource
    #[arg(long, global = true, env = "PORTAL_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PORTAL_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    #[arg(
        long = "output",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render records"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List policies, optionally narrowed by a search term
    List(ListArgs),
    /// Create a new policy
    Create(DraftArgs),
    /// Edit an existing policy
    Edit(EditArgs),
    /// Delete a policy after confirmation
    Delete(DeleteArgs),
    /// Calculate a premium without saving anything
    Quote(QuoteArgs),
    /// Check that the backend is reachable
    Health,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Match against beneficiary, car brand, car type or id
    #[arg(long, short = 's', default_value = "")]
    pub search: String,
}

/// Fields of the create/edit form; unset fields keep the draft's value
#[derive(Debug, Clone, Default, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub beneficiary: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long = "type")]
    pub car_type: Option<String>,
    /// Total sum insured
    #[arg(long)]
    pub tsi: Option<String>,
    /// Premium rate in percent
    #[arg(long)]
    pub rate: Option<String>,
    /// First covered day (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<PolicyDate>,
    /// Last covered day (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<PolicyDate>,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Policy identifier
    pub id: String,
    #[command(flatten)]
    pub fields: DraftArgs,
}

#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Policy identifier
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Total sum insured
    #[arg(long)]
    pub tsi: String,
    /// Premium rate in percent
    #[arg(long)]
    pub rate: String,
    #[arg(long, default_value = "USD", value_parser = parse_currency)]
    pub currency: Currency,
}

fn parse_currency(input: &str) -> Result<Currency, String> {
    input.parse().map_err(|e| format!("{e}"))
}
