//! Application services: the leads backend client and admin credential
//! verification.

pub mod auth;
pub mod leads;

pub use auth::{CredentialVerifier, StaticCredentials};
pub use leads::{LeadsApiError, LeadsClient};
