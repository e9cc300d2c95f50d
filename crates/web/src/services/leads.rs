//! Leads backend API client.
//!
//! Wraps the two REST calls the application makes: creating a lead and
//! fetching the full lead list. Both are single-attempt calls - retry and
//! backoff policy is deliberately left to the caller, which surfaces
//! failures to the user instead.

use serde::Deserialize;

use leaddesk_core::{Lead, LeadDraft};

use crate::config::LeadsApiConfig;

/// Fallback message when a create response carries no usable error text.
pub const CREATE_FALLBACK_MESSAGE: &str = "Request failed";

/// Fallback message when the list endpoint fails without a message.
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to fetch leads";

/// Errors that can occur when talking to the leads backend.
#[derive(Debug, thiserror::Error)]
pub enum LeadsApiError {
    /// HTTP request failed before a response envelope was available.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status or `ok: false` envelope.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Best available human-readable message.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LeadsApiError {
    /// The user-facing message for a failed create.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) | Self::Parse(_) => CREATE_FALLBACK_MESSAGE.to_string(),
        }
    }

    /// The user-facing message for a failed list fetch.
    #[must_use]
    pub fn fetch_user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) | Self::Parse(_) => "Failed to load leads.".to_string(),
        }
    }
}

/// A single entry of the backend's `errors` array.
///
/// The backend emits either bare strings or validator objects carrying a
/// `msg` field; both shapes appear in the wild.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    /// Validator-style entry: `{ "msg": "..." }`.
    Object {
        /// The validation message.
        msg: String,
    },
    /// Bare string entry.
    Text(String),
}

impl ApiErrorDetail {
    /// The message carried by this entry.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Object { msg } => msg,
            Self::Text(text) => text,
        }
    }
}

/// Notification delivery sub-status reported by the create endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DeliveryStatus {
    /// Whether the notification was handed off successfully.
    #[serde(default)]
    pub ok: bool,
}

/// Response envelope of `POST /api/leads`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLeadResponse {
    /// Whether the lead was persisted.
    #[serde(default)]
    pub ok: bool,
    /// Optional top-level message.
    #[serde(default)]
    pub message: Option<String>,
    /// Validation errors, first entry wins for display.
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
    /// WhatsApp notification delivery sub-status.
    #[serde(default)]
    pub whatsapp: Option<DeliveryStatus>,
}

impl CreateLeadResponse {
    /// Extract the best error message from a failed envelope.
    ///
    /// Preference order: first entry of `errors`, then `message`, then the
    /// generic fallback.
    #[must_use]
    pub fn first_error_message(&self) -> String {
        self.errors
            .first()
            .map(|e| e.message().to_string())
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| CREATE_FALLBACK_MESSAGE.to_string())
    }
}

/// Response envelope of `GET /api/leads`.
#[derive(Debug, Default, Deserialize)]
pub struct ListLeadsResponse {
    /// Whether the fetch succeeded.
    #[serde(default)]
    pub ok: bool,
    /// The leads, newest first as ordered by the backend.
    #[serde(default)]
    pub data: Vec<Lead>,
    /// Optional error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Client for the external leads backend.
#[derive(Debug, Clone)]
pub struct LeadsClient {
    client: reqwest::Client,
    base_url: String,
}

impl LeadsClient {
    /// Create a new leads API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &LeadsApiConfig) -> Result<Self, LeadsApiError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Submit a new lead to the backend.
    ///
    /// Sends the draft as a JSON body. A non-success HTTP status or an
    /// `ok: false` envelope is reported as [`LeadsApiError::Api`] carrying
    /// the backend's first validation message (or its fallback). A body
    /// that fails to parse is treated as an empty envelope, mirroring how
    /// the backend reports hard failures without JSON bodies.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsApiError::Http`] on transport failure and
    /// [`LeadsApiError::Api`] on a rejecting response.
    pub async fn create_lead(
        &self,
        draft: &LeadDraft,
    ) -> Result<CreateLeadResponse, LeadsApiError> {
        let url = format!("{}/api/leads", self.base_url);

        let response = self.client.post(&url).json(draft).send().await?;
        let status = response.status();

        let envelope: CreateLeadResponse = response.json().await.unwrap_or_default();

        if !status.is_success() || !envelope.ok {
            return Err(LeadsApiError::Api {
                status: status.as_u16(),
                message: envelope.first_error_message(),
            });
        }

        Ok(envelope)
    }

    /// Fetch all leads from the backend.
    ///
    /// Returns the array under `data` on success.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsApiError::Http`] on transport failure,
    /// [`LeadsApiError::Parse`] when the body is not a valid envelope, and
    /// [`LeadsApiError::Api`] on a rejecting response.
    pub async fn fetch_all_leads(&self) -> Result<Vec<Lead>, LeadsApiError> {
        let url = format!("{}/api/leads", self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        let envelope: ListLeadsResponse = response
            .json()
            .await
            .map_err(|e| LeadsApiError::Parse(e.to_string()))?;

        if !status.is_success() || !envelope.ok {
            return Err(LeadsApiError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_string()),
            });
        }

        Ok(envelope.data)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_object_form() {
        let detail: ApiErrorDetail =
            serde_json::from_str(r#"{ "msg": "phone is invalid" }"#).unwrap();
        assert_eq!(detail.message(), "phone is invalid");
    }

    #[test]
    fn test_error_detail_string_form() {
        let detail: ApiErrorDetail = serde_json::from_str(r#""email taken""#).unwrap();
        assert_eq!(detail.message(), "email taken");
    }

    #[test]
    fn test_first_error_message_prefers_errors_array() {
        let envelope: CreateLeadResponse = serde_json::from_str(
            r#"{ "ok": false, "message": "top level", "errors": [{ "msg": "first" }, "second"] }"#,
        )
        .unwrap();
        assert_eq!(envelope.first_error_message(), "first");
    }

    #[test]
    fn test_first_error_message_falls_back_to_message() {
        let envelope: CreateLeadResponse =
            serde_json::from_str(r#"{ "ok": false, "message": "top level" }"#).unwrap();
        assert_eq!(envelope.first_error_message(), "top level");
    }

    #[test]
    fn test_first_error_message_generic_fallback() {
        let envelope = CreateLeadResponse::default();
        assert_eq!(envelope.first_error_message(), CREATE_FALLBACK_MESSAGE);
    }

    #[test]
    fn test_create_envelope_with_whatsapp_status() {
        let envelope: CreateLeadResponse =
            serde_json::from_str(r#"{ "ok": true, "whatsapp": { "ok": true } }"#).unwrap();
        assert!(envelope.ok);
        assert!(envelope.whatsapp.unwrap().ok);
    }

    #[test]
    fn test_list_envelope_extracts_data() {
        let envelope: ListLeadsResponse = serde_json::from_str(
            r#"{
                "ok": true,
                "data": [{
                    "_id": "1",
                    "createdAt": "2026-01-01T00:00:00Z",
                    "customerName": "A",
                    "customerPhone": "9999999999",
                    "email": "a@b.com",
                    "location": "X"
                }]
            }"#,
        )
        .unwrap();
        assert!(envelope.ok);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].customer_name, "A");
    }

    #[test]
    fn test_api_error_user_message() {
        let err = LeadsApiError::Api {
            status: 422,
            message: "phone is invalid".to_string(),
        };
        assert_eq!(err.user_message(), "phone is invalid");

        let err = LeadsApiError::Parse("bad json".to_string());
        assert_eq!(err.user_message(), CREATE_FALLBACK_MESSAGE);
    }
}
