//! Transport and authorization port interfaces

use async_trait::async_trait;
use dinero_domain::{Result, TransportRequest, TransportResponse};

/// Performs a single HTTP exchange.
///
/// 4xx/5xx answers are returned as `Ok` responses carrying their status and
/// body. `Err(DineroError::Transport)` means no response was obtained at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// Provides bearer tokens for authorized API calls.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Retrieve a currently valid bearer token, refreshing it if needed.
    async fn access_token(&self) -> Result<String>;
}
