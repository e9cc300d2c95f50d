//! LeadDesk CLI - Lead listing and spreadsheet export tools.
//!
//! # Usage
//!
//! ```bash
//! # List all captured leads
//! ld-cli leads list
//!
//! # Export all leads to a spreadsheet in the current directory
//! ld-cli leads export
//!
//! # Export to an explicit path
//! ld-cli leads export -o /tmp/leads.xlsx
//! ```
//!
//! # Commands
//!
//! - `leads list` - Fetch and print all leads
//! - `leads export` - Fetch all leads and write the export workbook

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ld-cli")]
#[command(author, version, about = "LeadDesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with captured leads
    Leads {
        #[command(subcommand)]
        action: LeadsAction,
    },
}

#[derive(Subcommand)]
enum LeadsAction {
    /// Fetch and print all leads
    List,
    /// Fetch all leads and write the export spreadsheet
    Export {
        /// Output path (defaults to the dated export filename)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Leads { action } => match action {
            LeadsAction::List => commands::leads::list().await?,
            LeadsAction::Export { out } => commands::leads::export(out).await?,
        },
    }
    Ok(())
}
