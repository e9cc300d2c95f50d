//! Session-related types for admin authentication.
//!
//! Types stored in the session for authentication state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Carries the issuance time explicitly so callers can reason about
/// session age; expiry itself is enforced by the session layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// The username the admin logged in with.
    pub username: String,
    /// When this session was issued.
    pub logged_in_at: DateTime<Utc>,
}

impl CurrentAdmin {
    /// Create a freshly issued admin identity.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            logged_in_at: Utc::now(),
        }
    }
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
