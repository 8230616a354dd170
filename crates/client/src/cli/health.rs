//! Health CLI commands.

use clap::{Parser, Subcommand};

/// Health check commands.
#[derive(Debug, Parser)]
pub struct HealthCommand {
    #[command(subcommand)]
    pub action: HealthAction,
}

/// Available health actions.
#[derive(Debug, Subcommand)]
pub enum HealthAction {
    /// Backend status.
    Status,
    /// Storage readiness check.
    Ready,
}
