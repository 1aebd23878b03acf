//! # Dinero Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - reqwest-backed HTTP transport
//! - OAuth2 password-grant token manager
//! - Dinero REST endpoints (contacts, invoices, booking, email)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `dinero-core`
//! - Depends on `dinero-domain` and `dinero-core`
//! - Contains all "impure" code (network, environment, filesystem)

pub mod auth;
pub mod config;
pub mod dinero;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use auth::TokenManager;
pub use dinero::{DineroApi, DineroClient};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
