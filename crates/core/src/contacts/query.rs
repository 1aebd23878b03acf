//! Contact search filters
//!
//! Dinero's `queryFilter` is a list of `Field eq 'value'` clauses joined by
//! `;` (logical AND). Values are always quoted strings, so booleans travel as
//! `'true'`/`'false'`.

use std::fmt;

use dinero_domain::Contact;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered set of equality clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    clauses: Vec<(String, FilterValue)>,
}

impl ContactFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `field eq 'value'`. A repeated field replaces the earlier value
    /// in place.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let field = field.into();
        let value = value.into();
        match self.clauses.iter_mut().find(|(existing, _)| *existing == field) {
            Some(slot) => slot.1 = value,
            None => self.clauses.push((field, value)),
        }
        self
    }

    /// Identity-bearing fields of a candidate contact, in lookup order:
    /// ExternalReference, Name, VatNumber, EanNumber, IsPerson, Email.
    /// Empty strings are skipped.
    pub fn from_candidate(contact: &Contact) -> Self {
        let text_fields = [
            ("ExternalReference", &contact.external_reference),
            ("Name", &contact.name),
            ("VatNumber", &contact.vat_number),
            ("EanNumber", &contact.ean_number),
        ];

        let mut filter = Self::new();
        for (field, value) in text_fields {
            if let Some(text) = value.as_deref().filter(|text| !text.trim().is_empty()) {
                filter = filter.field(field, text);
            }
        }
        if let Some(is_person) = contact.is_person {
            filter = filter.field("IsPerson", is_person);
        }
        if let Some(email) = contact.email.as_deref().filter(|text| !text.trim().is_empty()) {
            filter = filter.field("Email", email);
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.clauses.iter().find(|(name, _)| name == field).map(|(_, value)| value)
    }

    /// Unencoded query expression, e.g. `Name eq 'Jane';IsPerson eq 'true'`.
    pub fn to_query_expression(&self) -> String {
        self.clauses
            .iter()
            .map(|(field, value)| format!("{field} eq '{value}'"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl<K, V> FromIterator<(K, V)> for ContactFilter
where
    K: Into<String>,
    V: Into<FilterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |filter, (field, value)| filter.field(field, value))
    }
}
