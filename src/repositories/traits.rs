use crate::domain::ContactKind;
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{BusinessContact, Contact, PersonalContact};

/// Repository for managing contacts.
///
/// Holds two independent ordered sequences, one per [`ContactKind`].
/// Insertion order is preserved within each sequence and names need not be
/// unique. Implementations are not synchronized; callers sharing a repository
/// must wrap it in a lock.
pub trait ContactRepository: Send + Sync {
    /// Append a contact to the personal sequence.
    fn add_personal(&mut self, contact: PersonalContact);

    /// Append a contact to the business sequence.
    fn add_business(&mut self, contact: BusinessContact);

    /// Remove and return the personal contact at `index`, shifting later entries left.
    fn remove_personal(&mut self, index: usize) -> RepositoryResult<Contact>;

    /// Remove and return the business contact at `index`, shifting later entries left.
    fn remove_business(&mut self, index: usize) -> RepositoryResult<Contact>;

    /// The personal sequence in insertion order.
    fn personal(&self) -> &[Contact];

    /// The business sequence in insertion order.
    fn business(&self) -> &[Contact];

    /// Find the first contact whose name equals `name`, ignoring case.
    ///
    /// Personal contacts are scanned before business contacts, so a personal
    /// entry shadows a business entry of the same name. `None` means no
    /// contact matched.
    fn search_by_name(&self, name: &str) -> Option<&Contact> {
        self.personal()
            .iter()
            .chain(self.business())
            .find(|contact| contact.name_matches(name))
    }

    /// The sequence for `kind`.
    fn contacts(&self, kind: ContactKind) -> &[Contact] {
        match kind {
            ContactKind::Personal => self.personal(),
            ContactKind::Business => self.business(),
        }
    }

    /// The contact at `index` in the sequence for `kind`.
    fn get(&self, kind: ContactKind, index: usize) -> RepositoryResult<&Contact> {
        let contacts = self.contacts(kind);
        contacts
            .get(index)
            .ok_or(RepositoryError::IndexOutOfRange {
                kind,
                index,
                len: contacts.len(),
            })
    }

    /// Append `contact` to the sequence matching its variant.
    ///
    /// Returns the position the contact now occupies.
    fn add(&mut self, contact: Contact) -> usize {
        let kind = contact.kind();
        match contact {
            Contact::Personal(contact) => self.add_personal(contact),
            Contact::Business(contact) => self.add_business(contact),
        }
        self.contacts(kind).len() - 1
    }

    /// Remove and return the contact at `index` in the sequence for `kind`.
    fn remove(&mut self, kind: ContactKind, index: usize) -> RepositoryResult<Contact> {
        match kind {
            ContactKind::Personal => self.remove_personal(index),
            ContactKind::Business => self.remove_business(index),
        }
    }

    /// Total number of contacts across both sequences.
    fn len(&self) -> usize {
        self.personal().len() + self.business().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
