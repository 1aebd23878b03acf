//! Domain types and models

pub mod contact;
pub mod email;
pub mod http;
pub mod invoice;

pub use contact::{Contact, ContactGuid, ContactInput, IdentifiedContact, PaymentConditionType};
pub use email::{merge_email_settings, EmailSettings};
pub use http::{Headers, HttpMethod, TransportRequest, TransportResponse};
pub use invoice::{CreatedInvoice, Invoice, InvoiceGuid, InvoiceLine, Language, Unit};
