//! Lead entity and submission draft.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::division::Division;
use super::email::{Email, EmailError};
use super::phone::{Phone, PhoneError};

/// Opaque backend-assigned lead identifier.
///
/// The backend owns lead identity; the client never inspects or fabricates
/// these values, so the wrapper is a plain string newtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    /// Wrap a backend-provided id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A captured lead as returned by the backend list endpoint.
///
/// Leads are immutable on this side: the client creates them via
/// [`LeadDraft`] and reads them back; it never updates or deletes.
///
/// Optional fields default to `None` because older records may omit keys
/// entirely. The wire format is camelCase, with the backend's historic
/// `areaofInterest` key preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: LeadId,
    /// Creation timestamp, set by the backend.
    pub created_at: DateTime<Utc>,
    /// Customer name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Customer email address.
    pub email: String,
    /// Customer location (city, state).
    pub location: String,
    /// Business division, if selected.
    #[serde(default)]
    pub division: Option<String>,
    /// Product category, if selected.
    #[serde(default)]
    pub product_category: Option<String>,
    /// Product, if selected.
    #[serde(default)]
    pub product: Option<String>,
    /// Free-form product description.
    #[serde(default)]
    pub product_description: Option<String>,
    /// Area of interest.
    #[serde(default, rename = "areaofInterest")]
    pub area_of_interest: Option<String>,
    /// Customer firm name.
    #[serde(default)]
    pub firm_name: Option<String>,
    /// Customer feedback.
    #[serde(default)]
    pub feedback: Option<String>,
    /// Internal remark / follow-up note.
    #[serde(default)]
    pub remark: Option<String>,
}

/// Validation errors for a [`LeadDraft`].
///
/// Only the first violation is reported; the form surfaces one message
/// at a time.
#[derive(thiserror::Error, Debug, Clone)]
pub enum LeadDraftError {
    /// Customer name is empty after trimming.
    #[error("customer name is required")]
    MissingCustomerName,
    /// Phone number failed validation.
    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneError),
    /// Email address failed validation.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
    /// Location is empty after trimming.
    #[error("location is required")]
    MissingLocation,
}

/// A lead submission payload, as collected by the form.
///
/// Required fields are kept as raw strings so the form can round-trip user
/// input unchanged; [`LeadDraft::validate`] applies the submission rules.
/// All other fields are optional and freely typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    /// Customer name (required, non-empty after trimming).
    pub customer_name: String,
    /// Customer phone (required, see [`Phone`]).
    pub customer_phone: String,
    /// Customer email (required, see [`Email`]).
    pub email: String,
    /// Customer location (required, non-empty after trimming).
    pub location: String,
    /// Business division.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<Division>,
    /// Product category.
    #[serde(default)]
    pub product_category: String,
    /// Product within the selected category.
    #[serde(default)]
    pub product: String,
    /// Free-form product description.
    #[serde(default)]
    pub product_description: String,
    /// Area of interest.
    #[serde(default, rename = "areaofInterest")]
    pub area_of_interest: String,
    /// Customer firm name.
    #[serde(default)]
    pub firm_name: String,
    /// Customer feedback.
    #[serde(default)]
    pub feedback: String,
    /// Internal remark / follow-up note.
    #[serde(default)]
    pub remark: String,
}

impl LeadDraft {
    /// Validate the draft against the submission rules.
    ///
    /// Checks, in order: non-empty trimmed customer name, phone pattern,
    /// email pattern, non-empty trimmed location. The first violation is
    /// returned; optional fields are never validated.
    ///
    /// # Errors
    ///
    /// Returns the first [`LeadDraftError`] encountered.
    pub fn validate(&self) -> Result<(), LeadDraftError> {
        if self.customer_name.trim().is_empty() {
            return Err(LeadDraftError::MissingCustomerName);
        }
        Phone::parse(&self.customer_phone)?;
        Email::parse(&self.email)?;
        if self.location.trim().is_empty() {
            return Err(LeadDraftError::MissingLocation);
        }
        Ok(())
    }

    /// Whether the draft would pass [`LeadDraft::validate`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_draft() -> LeadDraft {
        LeadDraft {
            customer_name: "A".to_owned(),
            customer_phone: "9999999999".to_owned(),
            email: "a@b.com".to_owned(),
            location: "X".to_owned(),
            ..LeadDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_each_missing_required_field_fails() {
        let mut draft = valid_draft();
        draft.customer_name = "   ".to_owned();
        assert!(matches!(
            draft.validate(),
            Err(LeadDraftError::MissingCustomerName)
        ));

        let mut draft = valid_draft();
        draft.customer_phone = "123".to_owned();
        assert!(matches!(draft.validate(), Err(LeadDraftError::InvalidPhone(_))));

        let mut draft = valid_draft();
        draft.email = "not-an-email".to_owned();
        assert!(matches!(draft.validate(), Err(LeadDraftError::InvalidEmail(_))));

        let mut draft = valid_draft();
        draft.location = String::new();
        assert!(matches!(draft.validate(), Err(LeadDraftError::MissingLocation)));
    }

    #[test]
    fn test_optional_fields_never_block_validation() {
        let mut draft = valid_draft();
        draft.division = Some(Division::Solar);
        draft.product_category = "anything at all".to_owned();
        draft.remark = "x".repeat(10_000);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let mut draft = valid_draft();
        draft.division = Some(Division::CrashBarrier);
        draft.area_of_interest = "Products".to_owned();

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["customerName"], "A");
        assert_eq!(json["customerPhone"], "9999999999");
        assert_eq!(json["division"], "Crash Barrier");
        // Historic backend key, not standard camelCase.
        assert_eq!(json["areaofInterest"], "Products");
        assert!(json.get("area_of_interest").is_none());
    }

    #[test]
    fn test_division_omitted_when_unset() {
        let json = serde_json::to_value(valid_draft()).unwrap();
        assert!(json.get("division").is_none());
    }

    #[test]
    fn test_lead_deserializes_backend_shape() {
        let lead: Lead = serde_json::from_str(
            r#"{
                "_id": "65f1c0ffee",
                "createdAt": "2026-03-12T10:30:00Z",
                "customerName": "John Doe",
                "customerPhone": "+91 98765 43210",
                "email": "john@example.com",
                "location": "Raipur, CG",
                "division": "Solar",
                "productCategory": "Mounting Structures",
                "areaofInterest": "Products"
            }"#,
        )
        .unwrap();

        assert_eq!(lead.id.as_str(), "65f1c0ffee");
        assert_eq!(lead.customer_name, "John Doe");
        assert_eq!(lead.division.as_deref(), Some("Solar"));
        assert_eq!(lead.area_of_interest.as_deref(), Some("Products"));
        // Keys absent from the payload default to None.
        assert!(lead.remark.is_none());
        assert!(lead.feedback.is_none());
    }

    #[test]
    fn test_lead_id_display() {
        let id = LeadId::new("abc123");
        assert_eq!(id.to_string(), "abc123");
    }
}
