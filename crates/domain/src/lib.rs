//! # Dinero Domain
//!
//! Business domain types for the Dinero accounting API client.
//!
//! This crate contains:
//! - Contact and invoice entities with typed identities
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Wire constants (endpoints, projections, defaults)
//!
//! ## Architecture
//! - No dependencies on other Dinero crates
//! - Pure data structures; no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
