//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `proplink`.
#[derive(Debug, Parser)]
#[command(
    name = "proplink",
    version,
    about = "Keep agent, manager and property selections consistent"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print agent options and the property options left by the current selection.
    Options {
        /// Show options as if this agent or manager were selected.
        #[arg(long)]
        agent: Option<String>,
        /// Print the full view as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Apply a linked change to the working form.
    Select {
        /// Field to edit: `agent`, `property`, or any form field name.
        field: String,
        /// New value; pass "" to clear.
        value: String,
    },
    /// Check that the selected property may be paired with the selected agent.
    Validate {
        /// Agent or manager code to check instead of the working form's.
        #[arg(long, requires = "property")]
        agent: Option<String>,
        /// Property code to check instead of the working form's.
        #[arg(long, requires = "agent")]
        property: Option<String>,
    },
    /// Copy a roster exported from the back office (YAML or JSON) into the store.
    Import {
        /// Path of the exported roster.
        path: PathBuf,
    },
    /// Summarize the roster and the working form.
    Show,
    /// Clear the working form.
    Reset,
}
