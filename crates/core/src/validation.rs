//! Field-presence validation run before every mutating call
//!
//! Each check names the first missing field so callers can fix the entity
//! without parsing messages. Nothing here touches the network.

use dinero_domain::{Contact, DineroError, InvoiceLine, Result};

const CONTACT: &str = "Contact";
const INVOICE_LINE: &str = "InvoiceLine";

fn has_text(value: Option<&String>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

fn require(present: bool, entity: &'static str, field: &'static str) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(DineroError::MissingParameter { entity, field })
    }
}

/// Contacts need `Name`, `IsPerson` and `CountryKey` before creation.
pub fn validate_new_contact(contact: &Contact) -> Result<()> {
    require(has_text(contact.name.as_ref()), CONTACT, "Name")?;
    require(contact.is_person.is_some(), CONTACT, "IsPerson")?;
    require(has_text(contact.country_key.as_ref()), CONTACT, "CountryKey")
}

/// Lines need `Unit`, `Quantity`, `Description`, `BaseAmountValue` and
/// `AccountNumber`, checked in that order.
pub fn validate_invoice_line(line: &InvoiceLine) -> Result<()> {
    require(line.unit.is_some(), INVOICE_LINE, "Unit")?;
    require(line.quantity.is_some(), INVOICE_LINE, "Quantity")?;
    require(has_text(line.description.as_ref()), INVOICE_LINE, "Description")?;
    require(line.base_amount_value.is_some(), INVOICE_LINE, "BaseAmountValue")?;
    require(line.account_number.is_some(), INVOICE_LINE, "AccountNumber")
}

/// Check every line; the first failing line determines the error.
pub fn validate_invoice_lines(lines: &[InvoiceLine]) -> Result<()> {
    lines.iter().try_for_each(validate_invoice_line)
}
