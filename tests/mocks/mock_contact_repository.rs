use contact_book_mcp_server::error::RepositoryResult;
use contact_book_mcp_server::models::{BusinessContact, Contact, PersonalContact};
use contact_book_mcp_server::repositories::{ContactRepository, InMemoryContactRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Stores contacts in an [`InMemoryContactRepository`] and tracks method calls
/// for verification. Clones share their call counts, so a test can keep one
/// clone while handing another to the service under test.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    inner: InMemoryContactRepository,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            inner: InMemoryContactRepository::new(),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a mock pre-populated with `contacts`.
    ///
    /// Seeding writes to the inner repository directly and is not counted.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mut mock = Self::new();
        for contact in contacts {
            mock.inner.add(contact);
        }
        mock
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactRepository for MockContactRepository {
    fn add_personal(&mut self, contact: PersonalContact) {
        self.track_call("add_personal");
        self.inner.add_personal(contact);
    }

    fn add_business(&mut self, contact: BusinessContact) {
        self.track_call("add_business");
        self.inner.add_business(contact);
    }

    fn remove_personal(&mut self, index: usize) -> RepositoryResult<Contact> {
        self.track_call("remove_personal");
        self.inner.remove_personal(index)
    }

    fn remove_business(&mut self, index: usize) -> RepositoryResult<Contact> {
        self.track_call("remove_business");
        self.inner.remove_business(index)
    }

    fn personal(&self) -> &[Contact] {
        self.inner.personal()
    }

    fn business(&self) -> &[Contact] {
        self.inner.business()
    }

    fn search_by_name(&self, name: &str) -> Option<&Contact> {
        self.track_call("search_by_name");
        self.inner.search_by_name(name)
    }
}
