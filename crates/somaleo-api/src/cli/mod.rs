//! CLI command definitions for the `somaleo` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod curriculum;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use somaleo_infra::config::DEFAULT_CONFIG_FILE;

/// Kenyan CBC AI tutor for Grades 6-9.
#[derive(Parser)]
#[command(name = "somaleo", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to the TOML config file.
    #[arg(long, global = true, env = "SOMALEO_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server.
    Serve {
        /// Port to listen on (overrides the config file).
        #[arg(short, long, env = "SOMALEO_PORT")]
        port: Option<u16>,

        /// Host to bind to (overrides the config file).
        #[arg(long, env = "SOMALEO_HOST")]
        host: Option<String>,
    },

    /// Chat with the tutor in the terminal.
    Chat {
        /// Session to continue (defaults to "default").
        #[arg(short, long)]
        session: Option<String>,
    },

    /// List supported subjects and grades.
    Curriculum,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
