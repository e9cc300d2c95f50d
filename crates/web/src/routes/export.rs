//! Admin spreadsheet export route handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use tracing::instrument;

use crate::error::AppError;
use crate::export::{build_workbook, export_filename};
use crate::middleware::RequireAdmin;
use crate::routes::redirect_with_error;
use crate::state::AppState;

/// Content type for .xlsx downloads.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download the current leads as a spreadsheet.
///
/// GET /admin/leads/export
///
/// Fetches the full list and streams it back as an attachment named with
/// the export prefix and today's date. An empty list redirects home with
/// an error toast instead of producing a file.
///
/// # Errors
///
/// Returns [`AppError`] if workbook construction itself fails; fetch
/// failures and the empty-list guard surface as toast redirects.
#[instrument(skip(state))]
pub async fn export_leads(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Response, AppError> {
    let leads = match state.leads().fetch_all_leads().await {
        Ok(leads) => leads,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch leads for export");
            return Ok(redirect_with_error("/", &e.fetch_user_message()).into_response());
        }
    };

    if leads.is_empty() {
        return Ok(redirect_with_error("/", "No leads to export.").into_response());
    }

    let count = leads.len();
    let bytes = build_workbook(&leads)?;
    let filename = export_filename(Utc::now().date_naive());

    tracing::info!(count, filename = %filename, "Exported leads to spreadsheet");

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}
