//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Lead form (plus leads panel for admins)
//! GET  /health                  - Health check
//!
//! # Leads
//! POST /leads                   - Submit a new lead
//! GET  /leads/product-options   - Product select options fragment (HTMX)
//!
//! # Catalogue
//! GET  /catalogue               - Brochure catalogue
//!
//! # Auth
//! GET  /auth/login              - Admin login page
//! POST /auth/login              - Admin login action
//! POST /auth/logout             - Admin logout action
//!
//! # Admin (requires session)
//! GET  /admin/leads/export      - Download the leads spreadsheet
//! ```

pub mod auth;
pub mod catalogue;
pub mod export;
pub mod home;
pub mod leads;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Kind of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation of a completed action.
    Success,
    /// Terminal failure of the triggering action.
    Error,
}

/// A transient notification rendered at the bottom of the page.
///
/// Toasts survive exactly one redirect: the target URL carries the message
/// as a query parameter and the page template renders it once.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Success or error styling.
    pub kind: ToastKind,
    /// Message shown to the user.
    pub message: String,
}

impl Toast {
    /// Build a success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Build an error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    /// Whether this is a success toast (used by templates for styling).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.kind, ToastKind::Success)
    }
}

/// Query parameters carrying a toast across a redirect.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    /// Success message, if any.
    pub success: Option<String>,
    /// Error message, if any; wins over `success` when both are present.
    pub error: Option<String>,
}

impl MessageQuery {
    /// Convert the query parameters into a toast, if one was carried.
    #[must_use]
    pub fn into_toast(self) -> Option<Toast> {
        if let Some(message) = self.error {
            return Some(Toast::error(message));
        }
        self.success.map(Toast::success)
    }
}

/// Redirect to `path` with a success toast.
pub(crate) fn redirect_with_success(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?success={}", urlencoding::encode(message)))
}

/// Redirect to `path` with an error toast.
pub(crate) fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?error={}", urlencoding::encode(message)))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/leads/export", get(export::export_leads))
}

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Lead form (home)
        .route("/", get(home::home))
        // Lead submission and form fragments
        .route("/leads", post(leads::submit))
        .route("/leads/product-options", get(leads::product_options))
        // Brochure catalogue
        .route("/catalogue", get(catalogue::catalogue))
        // Auth routes
        .nest("/auth", auth_routes())
        // Admin routes
        .nest("/admin", admin_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_query_error_wins() {
        let query = MessageQuery {
            success: Some("saved".to_string()),
            error: Some("failed".to_string()),
        };
        let toast = query.into_toast().expect("toast");
        assert!(!toast.is_success());
        assert_eq!(toast.message, "failed");
    }

    #[test]
    fn test_message_query_success_only() {
        let query = MessageQuery {
            success: Some("saved".to_string()),
            error: None,
        };
        let toast = query.into_toast().expect("toast");
        assert!(toast.is_success());
    }

    #[test]
    fn test_message_query_empty() {
        assert!(MessageQuery::default().into_toast().is_none());
    }
}
