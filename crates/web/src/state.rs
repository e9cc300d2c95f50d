//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::WebConfig;
use crate::products::{ProductCatalog, ProductCatalogError};
use crate::services::auth::{CredentialVerifier, StaticCredentials};
use crate::services::leads::{LeadsApiError, LeadsClient};

/// Error creating the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("leads client error: {0}")]
    Leads(#[from] LeadsApiError),
    #[error("product catalogue error: {0}")]
    Products(#[from] ProductCatalogError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the leads backend client, the product catalogue, and the
/// credential verifier behind the admin gate.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    leads: LeadsClient,
    products: ProductCatalog,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the leads client cannot be built or the embedded
    /// product catalogue fails to parse.
    pub fn new(config: WebConfig) -> Result<Self, StateError> {
        let leads = LeadsClient::new(&config.leads_api)?;
        let products = ProductCatalog::load()?;
        let verifier: Arc<dyn CredentialVerifier> =
            Arc::new(StaticCredentials::new(&config.admin));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                leads,
                products,
                verifier,
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the leads backend client.
    #[must_use]
    pub fn leads(&self) -> &LeadsClient {
        &self.inner.leads
    }

    /// Get a reference to the product catalogue.
    #[must_use]
    pub fn products(&self) -> &ProductCatalog {
        &self.inner.products
    }

    /// Get a reference to the admin credential verifier.
    #[must_use]
    pub fn verifier(&self) -> &dyn CredentialVerifier {
        self.inner.verifier.as_ref()
    }
}
