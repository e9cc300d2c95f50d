//! Lead listing and export commands.
//!
//! # Usage
//!
//! ```bash
//! ld-cli leads list
//! ld-cli leads export -o /tmp/leads.xlsx
//! ```
//!
//! # Environment Variables
//!
//! - `LEADS_API_BASE_URL` - Base URL of the leads backend

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use leaddesk_web::config::{ConfigError, LeadsApiConfig};
use leaddesk_web::export::{ExportError, build_workbook, export_filename};
use leaddesk_web::services::leads::{LeadsApiError, LeadsClient};

/// Errors that can occur during lead commands.
#[derive(Debug, Error)]
pub enum LeadsCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error("Leads API error: {0}")]
    Api(#[from] LeadsApiError),

    /// The workbook could not be built.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// The workbook could not be written to disk.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Target path of the export file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Build the API client from the environment.
fn api_client() -> Result<LeadsClient, LeadsCommandError> {
    dotenvy::dotenv().ok();
    let config = LeadsApiConfig::from_env()?;
    Ok(LeadsClient::new(&config)?)
}

/// Fetch and print all leads.
pub async fn list() -> Result<(), LeadsCommandError> {
    let client = api_client()?;

    tracing::info!("Fetching leads...");
    let leads = client.fetch_all_leads().await?;

    if leads.is_empty() {
        tracing::info!("No leads found.");
        return Ok(());
    }

    tracing::info!("{} lead(s):", leads.len());
    for (i, lead) in leads.iter().enumerate() {
        tracing::info!(
            "  {:>4}. {} <{}> {} - {} [{}]",
            i + 1,
            lead.customer_name,
            lead.email,
            lead.customer_phone,
            lead.location,
            lead.created_at.format("%d %b %Y"),
        );
    }

    Ok(())
}

/// Fetch all leads and write the export workbook.
///
/// With no explicit path, the file lands in the current directory under
/// the dated export filename.
pub async fn export(out: Option<PathBuf>) -> Result<(), LeadsCommandError> {
    let client = api_client()?;

    tracing::info!("Fetching leads...");
    let leads = client.fetch_all_leads().await?;

    let bytes = build_workbook(&leads)?;

    let path = out.unwrap_or_else(|| PathBuf::from(export_filename(Utc::now().date_naive())));
    std::fs::write(&path, bytes).map_err(|source| LeadsCommandError::Write {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!("Exported {} lead(s) to {}", leads.len(), path.display());

    Ok(())
}
