//! Conversions from external infrastructure errors into domain errors.

use dinero_domain::DineroError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DineroError);

impl From<InfraError> for DineroError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DineroError> for InfraError {
    fn from(value: DineroError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDineroError {
    fn into_dinero(self) -> DineroError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DineroError */
/* -------------------------------------------------------------------------- */

impl IntoDineroError for HttpError {
    fn into_dinero(self) -> DineroError {
        if self.is_timeout() {
            return DineroError::Transport("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return DineroError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return DineroError::Transport(format!("invalid HTTP request: {self}"));
        }

        if self.is_body() || self.is_decode() {
            return DineroError::Transport(format!("failed reading HTTP response body: {self}"));
        }

        DineroError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_dinero())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DineroError */
/* -------------------------------------------------------------------------- */

impl IntoDineroError for JsonError {
    fn into_dinero(self) -> DineroError {
        DineroError::InvalidResponse(format!("unexpected JSON shape: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_dinero())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::time::Duration;

    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn connection_refused_maps_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: DineroError = InfraError::from(error).into();
        match mapped {
            DineroError::Transport(msg) => assert!(msg.to_lowercase().contains("connection")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_maps_to_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client =
            Client::builder().no_proxy().timeout(Duration::from_millis(50)).build().unwrap();
        let error = client.get(server.uri()).send().await.unwrap_err();

        let mapped: DineroError = InfraError::from(error).into();
        match mapped {
            DineroError::Transport(msg) => assert!(msg.contains("timed out")),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_maps_to_invalid_response() {
        let error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let mapped: DineroError = InfraError::from(error).into();
        assert_eq!(mapped.label(), "invalid_response");
    }
}
