//! Admin authentication route handlers.
//!
//! The gate is a local credential check against configured values; it
//! unlocks the leads panel and export, nothing more.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::middleware::{OptionalAdmin, clear_current_admin, set_current_admin};
use crate::models::CurrentAdmin;
use crate::routes::{MessageQuery, Toast, redirect_with_error, redirect_with_success};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub toast: Option<Toast>,
    pub is_admin: bool,
    /// Inline form error (credential mismatch).
    pub error: Option<String>,
    /// Username to re-fill after a failed attempt.
    pub username: String,
}

/// Display the login page.
pub async fn login_page(
    OptionalAdmin(admin): OptionalAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        toast: query.into_toast(),
        is_admin: admin.is_some(),
        error: None,
        username: String::new(),
    }
}

/// Handle login form submission.
///
/// POST /auth/login
///
/// A match stores the admin identity (with issuance time) in the session
/// and redirects home; a mismatch re-renders the form with an inline
/// error. There is no lockout or rate limiting.
#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    if state.verifier().verify(&form.username, &form.password) {
        let admin = CurrentAdmin::new(form.username.trim());
        if let Err(e) = set_current_admin(&session, &admin).await {
            tracing::error!(error = %e, "Failed to set session");
            return redirect_with_error("/auth/login", "Session error, please try again.")
                .into_response();
        }

        tracing::info!("Admin logged in");
        redirect_with_success("/", "Logged in as admin.").into_response()
    } else {
        tracing::warn!("Admin login failed");
        LoginTemplate {
            toast: None,
            is_admin: false,
            error: Some("Invalid username or password.".to_string()),
            username: form.username,
        }
        .into_response()
    }
}

/// Handle logout.
///
/// POST /auth/logout
///
/// Destroys the whole session; the leads panel state lives only in
/// renders gated by it, so nothing else needs clearing.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_admin(&session).await {
        tracing::error!(error = %e, "Failed to clear session");
    }

    if let Err(e) = session.flush().await {
        tracing::error!(error = %e, "Failed to flush session");
    }

    redirect_with_success("/", "Logged out.").into_response()
}
