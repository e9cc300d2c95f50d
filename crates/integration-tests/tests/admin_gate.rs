//! Admin gate: credential verification and session identity.
//!
//! The gate is a state machine: logged out, then logged in on a
//! credential match, then logged out again on logout. The session layer
//! owns persistence; these tests cover the decision logic and the
//! session-stored identity.

use secrecy::SecretString;

use leaddesk_web::config::AdminCredentialsConfig;
use leaddesk_web::models::{CurrentAdmin, session_keys};
use leaddesk_web::services::auth::{CredentialVerifier, StaticCredentials};

fn configured() -> StaticCredentials {
    StaticCredentials::new(&AdminCredentialsConfig {
        username: "admin".to_string(),
        password: SecretString::from("kR8!mQ2@vZ5#"),
    })
}

// =============================================================================
// Credential Matrix
// =============================================================================

#[test]
fn test_matching_credentials_authenticate() {
    assert!(configured().verify("admin", "kR8!mQ2@vZ5#"));
}

#[test]
fn test_any_other_combination_stays_unauthenticated() {
    let verifier = configured();

    let attempts = [
        ("admin", "wrong"),
        ("wrong", "kR8!mQ2@vZ5#"),
        ("", ""),
        ("admin", ""),
        ("", "kR8!mQ2@vZ5#"),
        ("ADMIN", "kR8!mQ2@vZ5#"), // usernames are case-sensitive
    ];

    for (username, password) in attempts {
        assert!(
            !verifier.verify(username, password),
            "accepted {username:?}/{password:?}"
        );
    }
}

#[test]
fn test_username_whitespace_is_trimmed() {
    // The login form trims the username before comparing, as users often
    // paste it with surrounding whitespace.
    assert!(configured().verify(" admin ", "kR8!mQ2@vZ5#"));
}

#[test]
fn test_verifier_is_pluggable() {
    // A replacement implementation slots in behind the same trait.
    struct AlwaysDeny;
    impl CredentialVerifier for AlwaysDeny {
        fn verify(&self, _username: &str, _password: &str) -> bool {
            false
        }
    }

    let verifier: Box<dyn CredentialVerifier> = Box::new(AlwaysDeny);
    assert!(!verifier.verify("admin", "kR8!mQ2@vZ5#"));
}

// =============================================================================
// Session Identity
// =============================================================================

#[test]
fn test_current_admin_records_issuance_time() {
    let before = chrono::Utc::now();
    let admin = CurrentAdmin::new("admin");
    let after = chrono::Utc::now();

    assert_eq!(admin.username, "admin");
    assert!(admin.logged_in_at >= before && admin.logged_in_at <= after);
}

#[test]
fn test_current_admin_serde_roundtrip() {
    // The session store serializes the identity; it must round-trip.
    let admin = CurrentAdmin::new("admin");
    let json = serde_json::to_string(&admin).expect("serialize");
    let restored: CurrentAdmin = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.username, admin.username);
    assert_eq!(restored.logged_in_at, admin.logged_in_at);
}

#[test]
fn test_session_key_is_stable() {
    // Persisted sessions reference this key; renaming it logs everyone out.
    assert_eq!(session_keys::CURRENT_ADMIN, "current_admin");
}
