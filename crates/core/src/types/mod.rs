//! Core types for LeadDesk.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod division;
pub mod email;
pub mod lead;
pub mod phone;

pub use division::{Division, DivisionError};
pub use email::{Email, EmailError};
pub use lead::{Lead, LeadDraft, LeadDraftError, LeadId};
pub use phone::{Phone, PhoneError};
