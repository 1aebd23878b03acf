//! Invoice entities
//!
//! [`Invoice`] is the draft submitted to Dinero; it refers to its contact by
//! GUID only. After creation the server identity lives on
//! [`CreatedInvoice`], which is built from a copy of the draft.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use super::contact::{ContactGuid, PaymentConditionType};
use crate::impl_wire_enum_conversions;

/// Server-assigned invoice identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceGuid(String);

impl InvoiceGuid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvoiceGuid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Product unit accepted on invoice lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum Unit {
    Hours,
    Parts,
    Km,
    Day,
    Week,
    Month,
    Kilogram,
    CubicMetre,
    Set,
    Litre,
    Box,
    Case,
    Carton,
    Metre,
    Package,
    Shipment,
    SquareMetre,
    Session,
}

impl_wire_enum_conversions!(Unit {
    Hours => "hours",
    Parts => "parts",
    Km => "km",
    Day => "day",
    Week => "week",
    Month => "month",
    Kilogram => "kilogram",
    CubicMetre => "cubicMetre",
    Set => "set",
    Litre => "litre",
    Box => "box",
    Case => "case",
    Carton => "carton",
    Metre => "metre",
    Package => "package",
    Shipment => "shipment",
    SquareMetre => "squareMetre",
    Session => "session",
});

/// Voucher language. Dinero defaults to Danish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum Language {
    Danish,
    English,
}

impl_wire_enum_conversions!(Language {
    Danish => "da-DK",
    English => "en-GB",
});

/// Single product line. Lines have no identity of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Unit price excluding VAT.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_amount_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl InvoiceLine {
    /// Line with every field Dinero requires.
    pub fn new(
        description: impl Into<String>,
        quantity: f64,
        unit: Unit,
        base_amount_value: f64,
        account_number: u32,
    ) -> Self {
        Self {
            description: Some(description.into()),
            comments: None,
            base_amount_value: Some(base_amount_value),
            quantity: Some(quantity),
            account_number: Some(account_number),
            unit: Some(unit),
        }
    }

    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

/// Invoice draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Invoice {
    /// Days until the payment deadline. Left empty together with the
    /// condition type, the contact's defaults apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_condition_number_of_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_condition_type: Option<PaymentConditionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contact_guid: Option<ContactGuid>,
    /// ISO currency code; Dinero assumes DKK when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Serialized as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub product_lines: Vec<InvoiceLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Invoice {
    /// Empty draft addressed to an existing contact.
    pub fn for_contact(guid: ContactGuid) -> Self {
        Self { contact_guid: Some(guid), ..Self::default() }
    }

    pub fn contact_guid(&self) -> Option<&ContactGuid> {
        self.contact_guid.as_ref()
    }

    /// Copy of this draft addressed to `guid`.
    #[must_use]
    pub fn with_contact_guid(&self, guid: ContactGuid) -> Self {
        Self { contact_guid: Some(guid), ..self.clone() }
    }

    #[must_use]
    pub fn with_line(mut self, line: InvoiceLine) -> Self {
        self.product_lines.push(line);
        self
    }

    /// Copy of this draft carrying the server identity and timestamp.
    #[must_use]
    pub fn with_guid(&self, guid: InvoiceGuid, timestamp: impl Into<String>) -> CreatedInvoice {
        CreatedInvoice { guid, timestamp: timestamp.into(), invoice: self.clone() }
    }
}

/// Invoice that exists in Dinero (not necessarily booked).
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedInvoice {
    guid: InvoiceGuid,
    timestamp: String,
    invoice: Invoice,
}

impl CreatedInvoice {
    pub fn guid(&self) -> &InvoiceGuid {
        &self.guid
    }

    /// Concurrency token returned by creation; required to book.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl std::ops::Deref for CreatedInvoice {
    type Target = Invoice;

    fn deref(&self) -> &Self::Target {
        &self.invoice
    }
}
