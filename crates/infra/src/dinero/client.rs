//! Public entry point for the Dinero API
//!
//! # Usage
//!
//! ```no_run
//! use dinero_domain::{Contact, ContactInput, DineroConfig, Invoice, InvoiceLine, Unit};
//! use dinero_infra::DineroClient;
//!
//! # async fn example() -> dinero_domain::Result<()> {
//! let config = DineroConfig::new("client-id", "client-secret", "api-key", "12345");
//! let client = DineroClient::new(config)?;
//!
//! let invoice = Invoice::default()
//!     .with_line(InvoiceLine::new("Consulting", 3.0, Unit::Hours, 950.0, 1000));
//! let customer: ContactInput = Contact::person("Jane Doe", "DK").into();
//!
//! let created = client.create_invoice(&invoice, Some(&customer), true).await?;
//! println!("created {}", created.guid());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use dinero_core::{Clock, ContactFilter, ContactResolver, InvoiceService, SystemClock, Transport};
use dinero_domain::{
    Contact, ContactInput, CreatedInvoice, DineroConfig, EmailSettings, Headers, HttpMethod,
    IdentifiedContact, Invoice, InvoiceGuid, Result,
};
use serde_json::Value;
use tracing::info;

use super::api::DineroApi;
use crate::auth::TokenManager;
use crate::http::HttpClient;

/// Client for one Dinero organization.
///
/// Cheap to share behind an `Arc`; the token cache is the only mutable
/// state and is internally synchronized.
pub struct DineroClient {
    config: DineroConfig,
    tokens: Arc<TokenManager>,
    api: Arc<DineroApi>,
    contacts: ContactResolver,
    invoices: InvoiceService,
}

impl DineroClient {
    /// Build a client on the reqwest transport and the system clock.
    ///
    /// # Errors
    /// `MissingConfig` naming the first absent credential.
    pub fn new(config: DineroConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpClient::builder().timeout(config.timeout()).build()?;
        Self::with_transport(config, Arc::new(transport), Arc::new(SystemClock))
    }

    /// Build a client on a caller-supplied transport and clock.
    pub fn with_transport(
        config: DineroConfig,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;

        let tokens = Arc::new(TokenManager::new(&config, transport.clone(), clock));
        let api = Arc::new(DineroApi::new(&config, transport, tokens.clone()));
        let contacts = ContactResolver::new(api.clone());
        let invoices = InvoiceService::new(contacts.clone(), api.clone());

        info!(organization_id = %config.organization_id, "Dinero client ready");
        Ok(Self { config, tokens, api, contacts, invoices })
    }

    pub fn config(&self) -> &DineroConfig {
        &self.config
    }

    /// Current bearer token, refreshed when expired.
    pub async fn access_token(&self) -> Result<String> {
        self.tokens.get_access_token().await
    }

    /// Create a contact; `contact` itself is left untouched.
    pub async fn create_contact(&self, contact: &Contact) -> Result<IdentifiedContact> {
        self.contacts.create(contact).await
    }

    pub async fn find_contact(&self, filter: &ContactFilter) -> Result<Vec<IdentifiedContact>> {
        self.contacts.find(filter).await
    }

    /// Find-or-create without submitting anything else.
    pub async fn resolve_contact(&self, contact: &ContactInput) -> Result<IdentifiedContact> {
        self.contacts.resolve_or_create(contact).await
    }

    /// See [`InvoiceService::create_invoice`].
    pub async fn create_invoice(
        &self,
        invoice: &Invoice,
        contact: Option<&ContactInput>,
        book: bool,
    ) -> Result<CreatedInvoice> {
        self.invoices.create_invoice(invoice, contact, book).await
    }

    /// Book an invoice created earlier, e.g. after `BookingFailed`.
    pub async fn book_invoice(&self, guid: &InvoiceGuid, timestamp: &str) -> Result<()> {
        self.invoices.book_invoice(guid, timestamp).await
    }

    pub async fn send_invoice_email(
        &self,
        guid: &InvoiceGuid,
        settings: EmailSettings,
    ) -> Result<Value> {
        let response = self.api.send_invoice_email(guid, settings).await?;
        info!(invoice_guid = %guid, "Sent invoice email");
        Ok(response)
    }

    /// Authorized call to any organization-relative `path`.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        headers: Headers,
    ) -> Result<Value> {
        self.api.send(method, path, body, headers).await
    }
}
