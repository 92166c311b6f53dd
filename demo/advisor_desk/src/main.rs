//! PB Advisor Desk CLI
//!
//! Presentation host for the advisor dashboard: composes pages, client
//! detail views and proposal drafts for a fresh session and prints them as
//! JSON.
//!
//! # Commands
//!
//! - `advisor-desk page <page> [--group <name>]` - Compose a dashboard page
//! - `advisor-desk client <id>` - Client detail view
//! - `advisor-desk groups` - List client groups
//! - `advisor-desk proposal <client name>` - Draft a proposal
//! - `advisor-desk export <producer> [--client <id>] --out <file>` - Export a dataset as CSV

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use advisor_desk::config::DEFAULT_CONFIG_PATH;
use advisor_desk::prelude::*;

mod commands;

/// PB Advisor Desk
#[derive(Parser)]
#[command(name = "advisor-desk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a dashboard page
    Page {
        /// Page key or label (e.g. client_management)
        page: String,

        /// Select a client group before composing
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Show the client detail view
    Client {
        /// Client identifier (e.g. c101)
        id: String,
    },

    /// List client groups and their members
    Groups,

    /// Draft a proposal for a client
    Proposal {
        /// Client display name
        client: String,
    },

    /// Export a catalog dataset as CSV
    Export {
        /// Producer key (e.g. priority_list)
        producer: String,

        /// Client identifier, for client-keyed producers
        #[arg(long)]
        client: Option<String>,

        /// Output CSV file
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, fallback) = match &cli.config {
        Some(path) => (DeskConfig::load_with_env_and_validate(path)?, None),
        None => {
            let (config, err) = DeskConfig::load_or_default(&DeskConfig::default_path());
            let config = config.with_env_override();
            config.validate()?;
            (config, err)
        }
    };

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("advisor_desk={}", level.to_lowercase()).parse()?),
        )
        .init();

    match fallback {
        Some(ConfigError::Io(_)) => {
            info!(path = DEFAULT_CONFIG_PATH, "no configuration file, using defaults")
        }
        Some(err) => warn!(
            path = DEFAULT_CONFIG_PATH,
            error = %err,
            "configuration file ignored, using defaults"
        ),
        None => {}
    }

    info!(advisor = %config.advisor_name, "advisor desk starting");

    match cli.command {
        Commands::Page { page, group } => commands::page(&config, &page, group.as_deref()),
        Commands::Client { id } => commands::client(&config, &id),
        Commands::Groups => commands::groups(&config),
        Commands::Proposal { client } => commands::proposal(&config, &client),
        Commands::Export {
            producer,
            client,
            out,
        } => commands::export(&producer, client.as_deref(), &out),
    }
}
