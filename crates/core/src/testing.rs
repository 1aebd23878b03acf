//! In-memory port doubles shared by the unit tests of this crate.

use std::sync::Arc;

use async_trait::async_trait;
use dinero_domain::{
    Contact, ContactGuid, CreatedInvoice, DineroError, IdentifiedContact, Invoice, InvoiceGuid,
    Result,
};
use parking_lot::Mutex;

use crate::contacts::{ContactFilter, ContactRepository};
use crate::invoices::InvoiceGateway;

/// Contact store returning canned lookup results and recording every call.
#[derive(Default)]
pub struct FakeContactRepository {
    pub lookup_results: Mutex<Vec<IdentifiedContact>>,
    pub filters: Mutex<Vec<String>>,
    pub created: Mutex<Vec<Contact>>,
}

impl FakeContactRepository {
    pub fn with_matches(matches: Vec<IdentifiedContact>) -> Arc<Self> {
        Arc::new(Self { lookup_results: Mutex::new(matches), ..Self::default() })
    }

    pub fn find_calls(&self) -> usize {
        self.filters.lock().len()
    }

    pub fn create_calls(&self) -> usize {
        self.created.lock().len()
    }
}

#[async_trait]
impl ContactRepository for FakeContactRepository {
    async fn find_contacts(&self, filter: &ContactFilter) -> Result<Vec<IdentifiedContact>> {
        self.filters.lock().push(filter.to_query_expression());
        Ok(self.lookup_results.lock().clone())
    }

    async fn create_contact(&self, contact: &Contact) -> Result<IdentifiedContact> {
        let mut created = self.created.lock();
        created.push(contact.clone());
        Ok(contact.with_contact_guid(ContactGuid::new(format!("new-contact-{}", created.len()))))
    }
}

/// Invoice endpoint double; booking can be made to fail.
#[derive(Default)]
pub struct FakeInvoiceGateway {
    pub submitted: Mutex<Vec<Invoice>>,
    pub booked: Mutex<Vec<(InvoiceGuid, String)>>,
    pub fail_booking: bool,
}

impl FakeInvoiceGateway {
    pub fn failing_booking() -> Arc<Self> {
        Arc::new(Self { fail_booking: true, ..Self::default() })
    }
}

#[async_trait]
impl InvoiceGateway for FakeInvoiceGateway {
    async fn submit_invoice(&self, invoice: &Invoice) -> Result<CreatedInvoice> {
        self.submitted.lock().push(invoice.clone());
        Ok(invoice.with_guid(InvoiceGuid::new("invoice-1"), "0000000000000042"))
    }

    async fn book_invoice(&self, guid: &InvoiceGuid, timestamp: &str) -> Result<()> {
        if self.fail_booking {
            return Err(DineroError::Http {
                status: 409,
                body: serde_json::json!({ "message": "Timestamp mismatch" }),
            });
        }
        self.booked.lock().push((guid.clone(), timestamp.to_string()));
        Ok(())
    }
}
