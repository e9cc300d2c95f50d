//! LeadDesk Core - Shared types library.
//!
//! This crate provides common types used across all LeadDesk components:
//! - `web` - Public lead-capture site with the admin panel
//! - `cli` - Command-line tools for listing and exporting leads
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O and no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Lead entity, submission draft, and validated field types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
