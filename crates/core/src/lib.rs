//! # Dinero Core
//!
//! Client-side business rules, independent of the HTTP stack.
//!
//! This crate contains:
//! - Port interfaces (transport, token provider, contact and invoice
//!   endpoints)
//! - Field-presence validation for contacts and invoice lines
//! - Contact find-or-create resolution
//! - Invoice orchestration (resolve, submit, book)
//!
//! ## Architecture Principles
//! - Only depends on `dinero-domain`
//! - No HTTP or serialization-format code
//! - All external calls go through traits

pub mod contacts;
pub mod invoices;
pub mod time;
pub mod transport_ports;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// Re-export specific items to avoid ambiguity
pub use contacts::{ContactFilter, ContactRepository, ContactResolver, FilterValue};
pub use invoices::{InvoiceGateway, InvoiceService};
pub use time::{Clock, MockClock, SystemClock};
pub use transport_ports::{AccessTokenProvider, Transport};
