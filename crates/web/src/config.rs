//! Web application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LEADS_API_BASE_URL` - Base URL of the leads backend (e.g. `https://api.example.com`)
//! - `LEADDESK_ADMIN_USERNAME` - Admin panel username
//! - `LEADDESK_ADMIN_PASSWORD` - Admin panel password (min 8 chars, no placeholders)
//!
//! ## Optional
//! - `LEADDESK_HOST` - Bind address (default: 127.0.0.1)
//! - `LEADDESK_PORT` - Listen port (default: 3000)
//! - `LEADDESK_BASE_URL` - Public URL of this site (default: http://127.0.0.1:3000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const MIN_ADMIN_PASSWORD_LENGTH: usize = 8;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL of this site (used for secure-cookie detection)
    pub base_url: String,
    /// Leads backend API configuration
    pub leads_api: LeadsApiConfig,
    /// Admin panel credentials
    pub admin: AdminCredentialsConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Leads backend API configuration.
#[derive(Debug, Clone)]
pub struct LeadsApiConfig {
    /// Base URL of the backend, normalized without a trailing slash
    pub base_url: String,
}

/// Static admin credentials for the admin gate.
///
/// These gate access to the leads panel only; they are not a real security
/// boundary. Swap the `CredentialVerifier` implementation in
/// `services::auth` to back this with a real identity provider.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentialsConfig {
    /// Admin username
    pub username: String,
    /// Admin password
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentialsConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the admin password fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("LEADDESK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LEADDESK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LEADDESK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LEADDESK_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("LEADDESK_BASE_URL", "http://127.0.0.1:3000");

        let leads_api = LeadsApiConfig::from_env()?;
        let admin = AdminCredentialsConfig::from_env()?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            leads_api,
            admin,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl LeadsApiConfig {
    /// Load just the leads API configuration from the environment.
    ///
    /// Used standalone by the CLI, which doesn't need the rest of the web
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `LEADS_API_BASE_URL` is missing or not an
    /// absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = get_required_env("LEADS_API_BASE_URL")?;

        // Must be an absolute http(s) URL
        let parsed = url::Url::parse(&raw).map_err(|e| {
            ConfigError::InvalidEnvVar("LEADS_API_BASE_URL".to_string(), e.to_string())
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidEnvVar(
                "LEADS_API_BASE_URL".to_string(),
                format!("unsupported scheme: {}", parsed.scheme()),
            ));
        }

        Ok(Self {
            base_url: normalize_base_url(&raw),
        })
    }
}

impl AdminCredentialsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let username = get_required_env("LEADDESK_ADMIN_USERNAME")?;
        let password = get_required_env("LEADDESK_ADMIN_PASSWORD")?;
        validate_admin_password(&password, "LEADDESK_ADMIN_PASSWORD")?;

        Ok(Self {
            username,
            password: SecretString::from(password),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Strip trailing slashes from a base URL so paths can be appended safely.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

/// Validate that the admin password is not a placeholder and meets the
/// minimum length.
fn validate_admin_password(password: &str, var_name: &str) -> Result<(), ConfigError> {
    if password.len() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_ADMIN_PASSWORD_LENGTH,
                password.len()
            ),
        ));
    }

    let lower = password.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://api.example.com/"),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com///"),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com"),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_validate_admin_password_too_short() {
        let result = validate_admin_password("short", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_admin_password_placeholder() {
        let result = validate_admin_password("changeme123", "TEST_VAR");
        assert!(result.is_err());

        let result = validate_admin_password("your-admin-pass", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_admin_password_valid() {
        assert!(validate_admin_password("kR8!mQ2@vZ5#", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = WebConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://127.0.0.1:3000".to_string(),
            leads_api: LeadsApiConfig {
                base_url: "https://api.example.com".to_string(),
            },
            admin: AdminCredentialsConfig {
                username: "admin".to_string(),
                password: SecretString::from("kR8!mQ2@vZ5#"),
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_admin_config_debug_redacts_password() {
        let config = AdminCredentialsConfig {
            username: "admin".to_string(),
            password: SecretString::from("super_secret_admin_pw"),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_admin_pw"));
    }
}
