//! Contact find-or-create policy

use std::sync::Arc;

use dinero_domain::{Contact, ContactInput, DineroError, IdentifiedContact, Result};
use tracing::{debug, info, warn};

use super::ports::ContactRepository;
use super::query::ContactFilter;
use crate::validation::validate_new_contact;

/// Resolves contact profiles to Dinero identities without creating
/// duplicates.
#[derive(Clone)]
pub struct ContactResolver {
    repository: Arc<dyn ContactRepository>,
}

impl ContactResolver {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Search contacts matching every clause of `filter`.
    pub async fn find(&self, filter: &ContactFilter) -> Result<Vec<IdentifiedContact>> {
        let contacts = self.repository.find_contacts(filter).await?;
        debug!(clauses = filter.len(), matches = contacts.len(), "Contact lookup complete");
        Ok(contacts)
    }

    /// Create a contact after checking `Name`, `IsPerson` and `CountryKey`.
    ///
    /// The input is only borrowed; the returned value is a copy carrying the
    /// server-assigned GUID.
    ///
    /// # Errors
    /// `MissingParameter` before any network call when a field is absent.
    pub async fn create(&self, contact: &Contact) -> Result<IdentifiedContact> {
        validate_new_contact(contact)?;
        let created = self.repository.create_contact(contact).await?;
        info!(contact_guid = %created.guid(), "Created contact");
        Ok(created)
    }

    /// Find-or-create.
    ///
    /// - already identified: returned as-is, no lookup
    /// - no match: the candidate is created
    /// - one match: that contact is reused
    /// - several matches: `AmbiguousContact`
    ///
    /// A candidate without any identity field skips the lookup, since an
    /// empty filter would match every contact in the organization.
    pub async fn resolve_or_create(&self, input: &ContactInput) -> Result<IdentifiedContact> {
        let candidate = match input {
            ContactInput::Identified(contact) => return Ok(contact.clone()),
            ContactInput::Unidentified(contact) => contact,
        };

        let filter = ContactFilter::from_candidate(candidate);
        if filter.is_empty() {
            return self.create(candidate).await;
        }

        let mut matches = self.find(&filter).await?;
        match matches.len() {
            0 => self.create(candidate).await,
            1 => {
                let existing = matches.remove(0);
                debug!(contact_guid = %existing.guid(), "Reusing existing contact");
                Ok(existing)
            }
            count => {
                warn!(matches = count, "Contact lookup is ambiguous");
                Err(DineroError::AmbiguousContact { matches: count })
            }
        }
    }
}
