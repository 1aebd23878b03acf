//! Port interfaces for invoice endpoints

use async_trait::async_trait;
use dinero_domain::{CreatedInvoice, Invoice, InvoiceGuid, Result};

/// Remote invoice endpoints.
#[async_trait]
pub trait InvoiceGateway: Send + Sync {
    /// Submit a validated draft. The result carries the server `Guid` and
    /// `TimeStamp`.
    async fn submit_invoice(&self, invoice: &Invoice) -> Result<CreatedInvoice>;

    /// Book (finalize) a created invoice using its creation timestamp.
    async fn book_invoice(&self, guid: &InvoiceGuid, timestamp: &str) -> Result<()>;
}
