//! Admin credential verification.
//!
//! The admin gate compares submitted credentials against a configured
//! static pair. That check sits behind the [`CredentialVerifier`] trait so
//! a backend-verified login can be substituted without touching the route
//! handlers or templates.

use secrecy::{ExposeSecret, SecretString};

use crate::config::AdminCredentialsConfig;

/// Verifies admin credentials.
///
/// Implementations decide what "valid" means; the routes only care about
/// the boolean outcome and never see the stored secret.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when the submitted credentials are valid.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Static credential pair from configuration.
///
/// Not a real security boundary: a local string comparison with no
/// hashing, rate limiting, or lockout. It gates the admin panel UI only.
pub struct StaticCredentials {
    username: String,
    password: SecretString,
}

impl StaticCredentials {
    /// Build the verifier from the configured admin credentials.
    #[must_use]
    pub fn new(config: &AdminCredentialsConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // Username is trimmed the way the login form trims it; the
        // password is compared verbatim.
        username.trim() == self.username && password == self.password.expose_secret()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn verifier() -> StaticCredentials {
        StaticCredentials {
            username: "admin".to_string(),
            password: SecretString::from("kR8!mQ2@vZ5#"),
        }
    }

    #[test]
    fn test_verify_accepts_exact_match() {
        assert!(verifier().verify("admin", "kR8!mQ2@vZ5#"));
    }

    #[test]
    fn test_verify_trims_username_only() {
        assert!(verifier().verify("  admin  ", "kR8!mQ2@vZ5#"));
        // Password whitespace is significant.
        assert!(!verifier().verify("admin", " kR8!mQ2@vZ5#"));
    }

    #[test]
    fn test_verify_rejects_wrong_credentials() {
        assert!(!verifier().verify("admin", "wrong"));
        assert!(!verifier().verify("root", "kR8!mQ2@vZ5#"));
        assert!(!verifier().verify("", ""));
    }
}
