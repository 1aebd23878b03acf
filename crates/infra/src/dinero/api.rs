//! Organization-scoped Dinero endpoints

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dinero_core::{
    AccessTokenProvider, ContactFilter, ContactRepository, InvoiceGateway, Transport,
};
use dinero_domain::constants::{CONTACT_FIELDS, CONTENT_TYPE_JSON};
use dinero_domain::{
    merge_email_settings, Contact, ContactGuid, CreatedInvoice, DineroConfig, DineroError,
    EmailSettings, Headers, HttpMethod, IdentifiedContact, Invoice, InvoiceGuid, Result,
    TransportRequest,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::InfraError;

/// Authorized HTTP access to one organization's resources.
pub struct DineroApi {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn AccessTokenProvider>,
    organization_url: String,
    timeout: Duration,
    email_defaults: EmailSettings,
}

impl DineroApi {
    pub fn new(
        config: &DineroConfig,
        transport: Arc<dyn Transport>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            transport,
            tokens,
            organization_url: format!("{}/{}", config.api_base_url(), config.organization_id),
            timeout: config.timeout(),
            email_defaults: config.email_settings.clone(),
        }
    }

    /// Call `path` relative to the organization URL with a bearer token.
    ///
    /// `Authorization` and `Content-Type: application/json` are set first;
    /// entries in `headers` override them.
    ///
    /// # Errors
    /// - `Http` carrying status and decoded body for any non-2xx answer
    /// - errors from the token provider or the transport, unchanged
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        headers: Headers,
    ) -> Result<Value> {
        let token = self.tokens.access_token().await?;

        let mut defaults = Headers::new();
        defaults.insert("Authorization".into(), format!("Bearer {token}"));
        defaults.insert("Content-Type".into(), CONTENT_TYPE_JSON.into());

        let url = format!("{}/{}", self.organization_url, path.trim_start_matches('/'));
        let mut request =
            TransportRequest::new(method, &url, self.timeout).headers(defaults).headers(headers);
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        debug!(%method, %url, "Calling Dinero API");
        let response = self.transport.send(request).await?;
        debug!(%method, %url, status = response.status, "Dinero API responded");

        if !response.is_success() {
            return Err(DineroError::Http { status: response.status, body: response.body });
        }
        Ok(response.body)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T) -> Result<Value> {
        let body = serde_json::to_value(payload).map_err(InfraError::from)?;
        self.send(HttpMethod::Post, path, Some(&body), Headers::new()).await
    }

    /// Email an invoice. `settings` are merged over the configured defaults,
    /// with the caller's entries taking precedence.
    pub async fn send_invoice_email(
        &self,
        guid: &InvoiceGuid,
        settings: EmailSettings,
    ) -> Result<Value> {
        let merged = merge_email_settings(&self.email_defaults, settings);
        self.post(&format!("invoices/{guid}/email"), &merged).await
    }
}

fn required_str<'a>(body: &'a Value, field: &str) -> Result<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| DineroError::InvalidResponse(format!("response lacks '{field}': {body}")))
}

#[async_trait]
impl ContactRepository for DineroApi {
    async fn find_contacts(&self, filter: &ContactFilter) -> Result<Vec<IdentifiedContact>> {
        let path = format!(
            "contacts?queryFilter={}&fields={}",
            urlencoding::encode(&filter.to_query_expression()),
            urlencoding::encode(CONTACT_FIELDS),
        );
        let mut body = self.send(HttpMethod::Get, &path, None, Headers::new()).await?;

        let collection = match body.get_mut("Collection") {
            Some(Value::Array(items)) => std::mem::take(items),
            _ => {
                return Err(DineroError::InvalidResponse(format!(
                    "contact search lacks 'Collection': {body}"
                )))
            }
        };

        collection
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|err| DineroError::from(InfraError::from(err)))
            })
            .collect()
    }

    async fn create_contact(&self, contact: &Contact) -> Result<IdentifiedContact> {
        let body = self.post("contacts", contact).await?;
        let guid = required_str(&body, "ContactGuid")?;
        Ok(contact.with_contact_guid(ContactGuid::new(guid)))
    }
}

#[async_trait]
impl InvoiceGateway for DineroApi {
    async fn submit_invoice(&self, invoice: &Invoice) -> Result<CreatedInvoice> {
        let body = self.post("invoices", invoice).await?;
        let guid = required_str(&body, "Guid")?;
        let timestamp = required_str(&body, "TimeStamp")?;
        Ok(invoice.with_guid(InvoiceGuid::new(guid), timestamp))
    }

    async fn book_invoice(&self, guid: &InvoiceGuid, timestamp: &str) -> Result<()> {
        self.post(&format!("invoices/{guid}/book"), &json!({ "Timestamp": timestamp })).await?;
        Ok(())
    }
}
