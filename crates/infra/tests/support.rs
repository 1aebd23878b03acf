//! Shared fixtures for the Dinero client integration tests.

use std::sync::Arc;

use dinero_core::MockClock;
use dinero_domain::DineroConfig;
use dinero_infra::{DineroClient, HttpClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ORGANIZATION_ID: &str = "4711";
pub const TOKEN: &str = "integration-token";

/// Config pointing both the token endpoint and the API at `server`.
pub fn test_config(server: &MockServer) -> DineroConfig {
    DineroConfig::new("client", "secret", "api-key", ORGANIZATION_ID)
        .with_api_base_url(format!("{}/v1", server.uri()))
        .with_token_url(format!("{}/token", server.uri()))
}

/// Client on the real reqwest transport and a controllable clock.
pub fn client_with_clock(config: DineroConfig, clock: MockClock) -> DineroClient {
    let transport = Arc::new(HttpClient::new().expect("http client should build"));
    DineroClient::with_transport(config, transport, Arc::new(clock))
        .expect("client should accept a complete config")
}

pub fn client(server: &MockServer) -> DineroClient {
    client_with_clock(test_config(server), MockClock::new())
}

/// Token endpoint handing out [`TOKEN`] for an hour.
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": TOKEN, "expires_in": 3600 })),
        )
        .mount(server)
        .await;
}

/// Organization-relative API path, e.g. `api_path("contacts")`.
pub fn api_path(relative: &str) -> String {
    format!("/v1/{ORGANIZATION_ID}/{relative}")
}

/// Requests received so far, excluding the token exchange.
pub async fn api_requests(server: &MockServer) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|request| request.url.path() != "/token")
        .collect()
}
