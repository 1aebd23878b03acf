//! Error types used throughout the client

use thiserror::Error;

use crate::types::CreatedInvoice;

/// Main error type for the Dinero client
#[derive(Error, Debug)]
pub enum DineroError {
    /// A mandatory configuration key is absent or empty.
    #[error("Missing configuration: please specify '{0}' in your config")]
    MissingConfig(String),

    /// Configuration exists but could not be read or parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required entity field is absent before a mutating call.
    #[error("{entity} requires '{field}'")]
    MissingParameter { entity: &'static str, field: &'static str },

    /// The token endpoint answered without a usable access token.
    #[error("Failed obtaining access_token: {0}")]
    AuthenticationFailed(String),

    /// More than one existing contact matched a find-or-create lookup.
    #[error("Found {matches} contacts matching the lookup; refusing to guess which one to use")]
    AmbiguousContact { matches: usize },

    /// The HTTP layer could not complete the exchange at all.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Dinero API error (HTTP {status}): {body}")]
    Http { status: u16, body: serde_json::Value },

    /// The server answered with success but the payload is unusable.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The invoice was created but booking it failed. The created invoice is
    /// still valid and can be booked later with its GUID and timestamp.
    #[error("Invoice {} was created but booking failed: {source}", invoice.guid())]
    BookingFailed { invoice: Box<CreatedInvoice>, source: Box<DineroError> },
}

impl DineroError {
    /// Stable label suitable for structured logging.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MissingConfig(_) => "missing_config",
            Self::InvalidConfig(_) => "invalid_config",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::AuthenticationFailed(_) => "authentication_failed",
            Self::AmbiguousContact { .. } => "ambiguous_contact",
            Self::Transport(_) => "transport",
            Self::Http { .. } => "http",
            Self::InvalidResponse(_) => "invalid_response",
            Self::BookingFailed { .. } => "booking_failed",
        }
    }
}

/// Result type alias for Dinero operations
pub type Result<T> = std::result::Result<T, DineroError>;
