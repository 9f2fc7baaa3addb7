//! Policy Portal command-line front end
//!
//! This crate provides the presentation layer of the portal:
//! - **Config**: `PORTAL_*` environment settings
//! - **Cli**: clap definitions of the `policy-portal` subcommands
//! - **Commands**: handlers that drive the policy manager
//! - **Render**: table, banner and JSON output
//! - **Prompt**: the y/N delete confirmation

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::Portal;
pub use config::PortalConfig;
pub use error::{CliError, CliResult};
pub use prompt::StdinConfirmation;
