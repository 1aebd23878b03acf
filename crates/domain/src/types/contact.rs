//! Contact entities
//!
//! A [`Contact`] is a bag of profile fields with no identity. Dinero assigns
//! the identity; attaching it yields an [`IdentifiedContact`], a separate
//! type whose GUID can be read but never changed.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::impl_wire_enum_conversions;

/// Server-assigned contact identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactGuid(String);

impl ContactGuid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactGuid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Payment terms shared by contacts and invoices.
///
/// `Paid` is only meaningful on invoices. With `NettoCash` or `Paid` the
/// number-of-days field should stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum PaymentConditionType {
    Netto,
    NettoCash,
    CurrentMonthOut,
    Paid,
}

impl_wire_enum_conversions!(PaymentConditionType {
    Netto => "Netto",
    NettoCash => "NettoCash",
    CurrentMonthOut => "CurrentMonthOut",
    Paid => "Paid",
});

/// Contact profile without identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    /// Caller-side identifier, e.g. a web shop customer id. Max 128 chars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, alias = "Zipcode", skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter country code such as `DK`, `DE` or `SE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpage: Option<String>,
    /// Attention person for companies; leave empty for persons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub att_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    /// EAN number used for digital invoicing of public institutions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ean_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_condition_type: Option<PaymentConditionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_condition_number_of_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_person: Option<bool>,
}

impl Contact {
    /// Private person with the fields Dinero requires for creation.
    pub fn person(name: impl Into<String>, country_key: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            country_key: Some(country_key.into()),
            is_person: Some(true),
            ..Self::default()
        }
    }

    /// Company with the fields Dinero requires for creation.
    pub fn company(name: impl Into<String>, country_key: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            country_key: Some(country_key.into()),
            is_person: Some(false),
            ..Self::default()
        }
    }

    /// Copy of this profile carrying the given identity.
    #[must_use]
    pub fn with_contact_guid(&self, guid: ContactGuid) -> IdentifiedContact {
        IdentifiedContact { guid, contact: self.clone() }
    }
}

/// Contact known to Dinero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedContact {
    #[serde(rename = "ContactGuid")]
    guid: ContactGuid,
    #[serde(flatten)]
    contact: Contact,
}

impl IdentifiedContact {
    pub fn guid(&self) -> &ContactGuid {
        &self.guid
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}

impl std::ops::Deref for IdentifiedContact {
    type Target = Contact;

    fn deref(&self) -> &Self::Target {
        &self.contact
    }
}

/// Contact argument accepted by invoice creation: either a profile still to
/// be resolved, or a contact that already has its GUID.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactInput {
    Unidentified(Contact),
    Identified(IdentifiedContact),
}

impl From<Contact> for ContactInput {
    fn from(value: Contact) -> Self {
        Self::Unidentified(value)
    }
}

impl From<IdentifiedContact> for ContactInput {
    fn from(value: IdentifiedContact) -> Self {
        Self::Identified(value)
    }
}
