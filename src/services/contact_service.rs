//! Contact service layer.
//!
//! Business logic for adding, listing, removing and searching contacts.

use crate::domain::{ContactKind, RequiredText, ValidationError};
use crate::error::ServiceResult;
use crate::models::{BusinessContact, Contact, PersonalContact};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::RwLock;

/// Raw form input for a new personal contact.
#[derive(Debug, Clone, Default)]
pub struct PersonalContactParams {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub relation: String,
}

/// Raw form input for a new business contact.
#[derive(Debug, Clone, Default)]
pub struct BusinessContactParams {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub company_name: String,
    pub job_title: String,
}

/// One line of a contact list: where the entry lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSummary {
    pub kind: ContactKind,
    pub index: usize,
    pub name: String,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate and append a personal contact.
    ///
    /// Every field is trimmed and must be non-blank. Returns the stored
    /// contact and its position in the personal list.
    async fn add_personal_contact(
        &self,
        params: PersonalContactParams,
    ) -> ServiceResult<(usize, Contact)>;

    /// Validate and append a business contact.
    async fn add_business_contact(
        &self,
        params: BusinessContactParams,
    ) -> ServiceResult<(usize, Contact)>;

    /// Remove the contact at `index` of the `kind` list.
    async fn remove_contact(&self, kind: ContactKind, index: usize) -> ServiceResult<Contact>;

    /// Look a contact up by name (trimmed, case-insensitive).
    ///
    /// `Ok(None)` means no contact matched.
    async fn search_by_name(&self, name: &str) -> ServiceResult<Option<Contact>>;

    /// Summaries of the `kind` list in display order.
    async fn list_contacts(&self, kind: ContactKind) -> Vec<ContactSummary>;

    /// Full details of the contact at `index` of the `kind` list.
    async fn get_contact_details(&self, kind: ContactKind, index: usize)
        -> ServiceResult<Contact>;
}

/// Default implementation of ContactService.
///
/// A single lock guards both sequences of the wrapped repository.
pub struct ContactServiceImpl {
    repository: RwLock<Box<dyn ContactRepository>>,
}

/// Validation helper functions.
impl ContactServiceImpl {
    fn validate_personal(params: PersonalContactParams) -> Result<PersonalContact, ValidationError> {
        Ok(PersonalContact::new(
            RequiredText::new("name", params.name)?.into_inner(),
            RequiredText::new("phone_number", params.phone_number)?.into_inner(),
            RequiredText::new("email", params.email)?.into_inner(),
            RequiredText::new("relation", params.relation)?.into_inner(),
        ))
    }

    fn validate_business(params: BusinessContactParams) -> Result<BusinessContact, ValidationError> {
        Ok(BusinessContact::new(
            RequiredText::new("name", params.name)?.into_inner(),
            RequiredText::new("phone_number", params.phone_number)?.into_inner(),
            RequiredText::new("email", params.email)?.into_inner(),
            RequiredText::new("company_name", params.company_name)?.into_inner(),
            RequiredText::new("job_title", params.job_title)?.into_inner(),
        ))
    }

    fn validate_search_name(name: &str) -> Result<&str, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankSearchName);
        }
        Ok(name)
    }
}

impl ContactServiceImpl {
    /// Create a new contact service over `repository`.
    pub fn new(repository: Box<dyn ContactRepository>) -> Self {
        Self {
            repository: RwLock::new(repository),
        }
    }

    async fn store(&self, contact: Contact) -> (usize, Contact) {
        let kind = contact.kind();
        let mut repo = self.repository.write().await;
        let index = repo.add(contact.clone());
        tracing::info!(kind = %kind, index, name = %contact.name(), "Contact added");
        (index, contact)
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn add_personal_contact(
        &self,
        params: PersonalContactParams,
    ) -> ServiceResult<(usize, Contact)> {
        let contact = Self::validate_personal(params).map_err(|e| {
            tracing::warn!("Rejected personal contact: {}", e);
            e
        })?;
        Ok(self.store(contact.into()).await)
    }

    async fn add_business_contact(
        &self,
        params: BusinessContactParams,
    ) -> ServiceResult<(usize, Contact)> {
        let contact = Self::validate_business(params).map_err(|e| {
            tracing::warn!("Rejected business contact: {}", e);
            e
        })?;
        Ok(self.store(contact.into()).await)
    }

    async fn remove_contact(&self, kind: ContactKind, index: usize) -> ServiceResult<Contact> {
        let mut repo = self.repository.write().await;
        let removed = repo.remove(kind, index).map_err(|e| {
            tracing::warn!("Remove failed: {}", e);
            e
        })?;
        tracing::info!(kind = %kind, index, name = %removed.name(), "Contact removed");
        Ok(removed)
    }

    async fn search_by_name(&self, name: &str) -> ServiceResult<Option<Contact>> {
        let name = Self::validate_search_name(name)?;
        let repo = self.repository.read().await;
        let found = repo.search_by_name(name).cloned();
        tracing::debug!(query = %name, found = found.is_some(), "Contact search completed");
        Ok(found)
    }

    async fn list_contacts(&self, kind: ContactKind) -> Vec<ContactSummary> {
        let repo = self.repository.read().await;
        repo.contacts(kind)
            .iter()
            .enumerate()
            .map(|(index, contact)| ContactSummary {
                kind,
                index,
                name: contact.name().to_string(),
            })
            .collect()
    }

    async fn get_contact_details(
        &self,
        kind: ContactKind,
        index: usize,
    ) -> ServiceResult<Contact> {
        let repo = self.repository.read().await;
        let contact = repo.get(kind, index)?.clone();
        tracing::debug!(kind = %kind, index, "Contact details retrieved");
        Ok(contact)
    }
}
