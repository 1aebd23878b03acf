//! Invoice orchestration - core business logic
//!
//! Creating an invoice is a short pipeline:
//! 1. require a contact identity (GUID on the draft or a contact argument)
//! 2. validate every product line
//! 3. resolve the contact (find-or-create) and address a copy of the draft
//! 4. submit
//! 5. optionally book with the creation timestamp
//!
//! Steps 1-2 never touch the network. Nothing is rolled back: an invoice
//! whose booking fails stays created, and the error hands it back.

use std::sync::Arc;

use dinero_domain::{ContactInput, CreatedInvoice, DineroError, Invoice, InvoiceGuid, Result};
use tracing::{info, warn};

use super::ports::InvoiceGateway;
use crate::contacts::ContactResolver;
use crate::validation::validate_invoice_lines;

/// Invoice orchestration service
pub struct InvoiceService {
    contacts: ContactResolver,
    gateway: Arc<dyn InvoiceGateway>,
}

impl InvoiceService {
    pub fn new(contacts: ContactResolver, gateway: Arc<dyn InvoiceGateway>) -> Self {
        Self { contacts, gateway }
    }

    /// Create an invoice, resolving `contact` first when given.
    ///
    /// # Errors
    /// - `MissingParameter` when neither a contact GUID nor a contact is
    ///   supplied, or a product line lacks a required field
    /// - `AmbiguousContact` when the contact lookup matches several records
    /// - `BookingFailed` when `book` is set and booking fails; the error
    ///   carries the created invoice
    /// - any transport or HTTP error from the calls themselves
    pub async fn create_invoice(
        &self,
        invoice: &Invoice,
        contact: Option<&ContactInput>,
        book: bool,
    ) -> Result<CreatedInvoice> {
        if invoice.contact_guid().is_none() && contact.is_none() {
            return Err(DineroError::MissingParameter { entity: "Invoice", field: "ContactGuid" });
        }

        validate_invoice_lines(&invoice.product_lines)?;

        let draft = match contact {
            Some(input) => {
                let resolved = self.contacts.resolve_or_create(input).await?;
                invoice.with_contact_guid(resolved.guid().clone())
            }
            None => invoice.clone(),
        };

        let created = self.gateway.submit_invoice(&draft).await?;
        info!(
            invoice_guid = %created.guid(),
            lines = created.product_lines.len(),
            "Created invoice"
        );

        if book {
            if let Err(source) = self.book(&created).await {
                warn!(
                    invoice_guid = %created.guid(),
                    error = %source,
                    "Invoice created but not booked"
                );
                return Err(DineroError::BookingFailed {
                    invoice: Box::new(created),
                    source: Box::new(source),
                });
            }
        }

        Ok(created)
    }

    /// Book a created invoice.
    pub async fn book(&self, invoice: &CreatedInvoice) -> Result<()> {
        self.book_invoice(invoice.guid(), invoice.timestamp()).await
    }

    /// Book by GUID and creation timestamp. Use this to retry after a
    /// `BookingFailed` error.
    pub async fn book_invoice(&self, guid: &InvoiceGuid, timestamp: &str) -> Result<()> {
        self.gateway.book_invoice(guid, timestamp).await?;
        info!(invoice_guid = %guid, "Booked invoice");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dinero_domain::{Contact, ContactGuid, IdentifiedContact, InvoiceLine, Unit};

    use super::*;
    use crate::testing::{FakeContactRepository, FakeInvoiceGateway};

    fn line() -> InvoiceLine {
        InvoiceLine::new("Consulting", 2.0, Unit::Hours, 950.0, 1000)
    }

    fn service(
        repo: Arc<FakeContactRepository>,
        gateway: Arc<FakeInvoiceGateway>,
    ) -> InvoiceService {
        InvoiceService::new(ContactResolver::new(repo), gateway)
    }

    fn identified(guid: &str) -> IdentifiedContact {
        Contact::person("Jane", "DK").with_contact_guid(ContactGuid::new(guid))
    }

    #[tokio::test]
    async fn requires_contact_guid_or_contact() {
        let gateway = Arc::new(FakeInvoiceGateway::default());
        let service = service(FakeContactRepository::with_matches(vec![]), gateway.clone());

        let invoice = Invoice::default().with_line(line());

        let result = service.create_invoice(&invoice, None, false).await;

        assert!(matches!(
            result,
            Err(DineroError::MissingParameter { entity: "Invoice", field: "ContactGuid" })
        ));
        assert!(gateway.submitted.lock().is_empty());
    }

    #[tokio::test]
    async fn invalid_line_fails_before_any_call() {
        let repo = FakeContactRepository::with_matches(vec![]);
        let gateway = Arc::new(FakeInvoiceGateway::default());
        let service = service(repo.clone(), gateway.clone());
        let bad = InvoiceLine { account_number: None, ..line() };
        let invoice = Invoice::default().with_line(line()).with_line(bad);

        let result = service
            .create_invoice(&invoice, Some(&Contact::person("Jane", "DK").into()), false)
            .await;

        assert!(matches!(
            result,
            Err(DineroError::MissingParameter { field: "AccountNumber", .. })
        ));
        assert_eq!(repo.find_calls(), 0);
        assert!(gateway.submitted.lock().is_empty());
    }

    #[tokio::test]
    async fn existing_contact_guid_is_submitted_as_is() {
        let repo = FakeContactRepository::with_matches(vec![]);
        let gateway = Arc::new(FakeInvoiceGateway::default());
        let service = service(repo.clone(), gateway.clone());
        let invoice = Invoice::for_contact(ContactGuid::new("c-5")).with_line(line());

        let created = service.create_invoice(&invoice, None, false).await.unwrap();

        assert_eq!(created.guid().as_str(), "invoice-1");
        assert_eq!(created.contact_guid().map(ContactGuid::as_str), Some("c-5"));
        assert_eq!(repo.find_calls(), 0);
        assert!(gateway.booked.lock().is_empty());
    }

    #[tokio::test]
    async fn resolved_contact_guid_is_set_on_a_copy() {
        let repo = FakeContactRepository::with_matches(vec![identified("c-8")]);
        let gateway = Arc::new(FakeInvoiceGateway::default());
        let service = service(repo, gateway.clone());
        let invoice = Invoice::default().with_line(line());

        let created = service
            .create_invoice(&invoice, Some(&Contact::person("Jane", "DK").into()), false)
            .await
            .unwrap();

        assert!(invoice.contact_guid().is_none());
        assert_eq!(created.contact_guid().map(ContactGuid::as_str), Some("c-8"));
        assert_eq!(
            gateway.submitted.lock()[0].contact_guid().map(ContactGuid::as_str),
            Some("c-8")
        );
    }

    #[tokio::test]
    async fn ambiguous_contact_prevents_submission() {
        let repo = FakeContactRepository::with_matches(vec![identified("a"), identified("b")]);
        let gateway = Arc::new(FakeInvoiceGateway::default());
        let service = service(repo, gateway.clone());

        let result = service
            .create_invoice(
                &Invoice::default().with_line(line()),
                Some(&Contact::person("Jane", "DK").into()),
                false,
            )
            .await;

        assert!(matches!(result, Err(DineroError::AmbiguousContact { matches: 2 })));
        assert!(gateway.submitted.lock().is_empty());
    }

    #[tokio::test]
    async fn booking_uses_creation_timestamp() {
        let gateway = Arc::new(FakeInvoiceGateway::default());
        let service = service(FakeContactRepository::with_matches(vec![]), gateway.clone());
        let invoice = Invoice::for_contact(ContactGuid::new("c-1")).with_line(line());

        service.create_invoice(&invoice, None, true).await.unwrap();

        let booked = gateway.booked.lock();
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].0.as_str(), "invoice-1");
        assert_eq!(booked[0].1, "0000000000000042");
    }

    #[tokio::test]
    async fn booking_failure_returns_the_created_invoice() {
        let gateway = FakeInvoiceGateway::failing_booking();
        let service = service(FakeContactRepository::with_matches(vec![]), gateway.clone());
        let invoice = Invoice::for_contact(ContactGuid::new("c-1")).with_line(line());

        let result = service.create_invoice(&invoice, None, true).await;

        match result {
            Err(DineroError::BookingFailed { invoice, source }) => {
                assert_eq!(invoice.guid().as_str(), "invoice-1");
                assert_eq!(invoice.timestamp(), "0000000000000042");
                assert!(matches!(*source, DineroError::Http { status: 409, .. }));
            }
            other => panic!("expected BookingFailed, got {other:?}"),
        }
        assert_eq!(gateway.submitted.lock().len(), 1);
    }
}
