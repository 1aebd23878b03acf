//! Port interfaces for contact persistence

use async_trait::async_trait;
use dinero_domain::{Contact, IdentifiedContact, Result};

use super::query::ContactFilter;

/// Remote contact store.
///
/// Implementations perform the raw calls only; validation and
/// find-or-create policy live in [`super::ContactResolver`].
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Search contacts matching every clause of `filter`.
    async fn find_contacts(&self, filter: &ContactFilter) -> Result<Vec<IdentifiedContact>>;

    /// Create `contact` and return it with its server-assigned GUID.
    async fn create_contact(&self, contact: &Contact) -> Result<IdentifiedContact>;
}
