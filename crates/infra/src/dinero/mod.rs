//! Dinero REST API integration
//!
//! [`DineroApi`] implements the contact and invoice ports over HTTP;
//! [`DineroClient`] wires it together with the token manager and the core
//! services into the public entry point.

pub mod api;
pub mod client;

pub use api::DineroApi;
pub use client::DineroClient;
