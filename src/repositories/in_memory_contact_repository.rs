use crate::domain::ContactKind;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{BusinessContact, Contact, PersonalContact};
use crate::repositories::ContactRepository;

/// In-memory implementation of ContactRepository backed by two vectors.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    personal: Vec<Contact>,
    business: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn remove_at(
        contacts: &mut Vec<Contact>,
        kind: ContactKind,
        index: usize,
    ) -> RepositoryResult<Contact> {
        if index >= contacts.len() {
            return Err(RepositoryError::IndexOutOfRange {
                kind,
                index,
                len: contacts.len(),
            });
        }
        Ok(contacts.remove(index))
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add_personal(&mut self, contact: PersonalContact) {
        self.personal.push(Contact::Personal(contact));
    }

    fn add_business(&mut self, contact: BusinessContact) {
        self.business.push(Contact::Business(contact));
    }

    fn remove_personal(&mut self, index: usize) -> RepositoryResult<Contact> {
        Self::remove_at(&mut self.personal, ContactKind::Personal, index)
    }

    fn remove_business(&mut self, index: usize) -> RepositoryResult<Contact> {
        Self::remove_at(&mut self.business, ContactKind::Business, index)
    }

    fn personal(&self) -> &[Contact] {
        &self.personal
    }

    fn business(&self) -> &[Contact] {
        &self.business
    }
}
