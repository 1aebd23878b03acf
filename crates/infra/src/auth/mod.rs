//! Dinero API authentication
//!
//! Dinero issues short-lived bearer tokens through an OAuth2 password grant
//! where the organization API key acts as both username and password.

pub mod token_manager;

pub use token_manager::TokenManager;
