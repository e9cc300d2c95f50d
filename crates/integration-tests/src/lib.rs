//! Integration tests for LeadDesk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p leaddesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `lead_validation` - Submission draft validation matrix
//! - `api_envelope` - Backend response envelope parsing
//! - `export_workbook` - Spreadsheet export layout and guards
//! - `admin_gate` - Credential verification and session identity
//!
//! The tests exercise the library crates directly; none of them require a
//! running leads backend.
