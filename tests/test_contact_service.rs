//! Integration tests for the contact service layer.
//!
//! The service is driven against a call-counting mock repository to check
//! input validation, trimming and delegation to the repository.

mod mocks;

use contact_book_mcp_server::domain::{ContactKind, ValidationError};
use contact_book_mcp_server::error::{RepositoryError, ServiceError};
use contact_book_mcp_server::models::{BusinessContact, Contact, PersonalContact};
use contact_book_mcp_server::services::{
    BusinessContactParams, ContactService, ContactServiceImpl, PersonalContactParams,
};
use mocks::MockContactRepository;
use std::sync::Arc;

fn alice_params() -> PersonalContactParams {
    PersonalContactParams {
        name: "  Alice ".to_string(),
        phone_number: "555-1234".to_string(),
        email: " a@x.com".to_string(),
        relation: "Sister\n".to_string(),
    }
}

fn bob_params() -> BusinessContactParams {
    BusinessContactParams {
        name: "Bob".to_string(),
        phone_number: "555-9999".to_string(),
        email: "b@x.com".to_string(),
        company_name: "Acme".to_string(),
        job_title: "Engineer".to_string(),
    }
}

fn service_with(mock: &MockContactRepository) -> ContactServiceImpl {
    ContactServiceImpl::new(Box::new(mock.clone()))
}

#[tokio::test]
async fn test_add_personal_trims_fields() {
    let mock = MockContactRepository::new();
    let service = service_with(&mock);

    let (index, contact) = service.add_personal_contact(alice_params()).await.unwrap();

    assert_eq!(index, 0);
    assert_eq!(
        contact,
        Contact::from(PersonalContact::new("Alice", "555-1234", "a@x.com", "Sister"))
    );
    assert_eq!(mock.get_call_count("add_personal"), 1);
    assert_eq!(mock.get_call_count("add_business"), 0);
}

#[tokio::test]
async fn test_add_rejects_blank_fields_without_touching_repository() {
    let mock = MockContactRepository::new();
    let service = service_with(&mock);

    let mut params = bob_params();
    params.job_title = "   ".to_string();
    let err = service.add_business_contact(params).await.unwrap_err();

    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::BlankField("job_title"))
    );
    assert_eq!(mock.get_call_count("add_business"), 0);
    assert!(service.list_contacts(ContactKind::Business).await.is_empty());
}

#[tokio::test]
async fn test_add_reports_first_blank_field_in_form_order() {
    let service = service_with(&MockContactRepository::new());

    let err = service
        .add_personal_contact(PersonalContactParams::default())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::BlankField("name"))
    );
}

#[tokio::test]
async fn test_list_contacts_in_insertion_order() {
    let service = service_with(&MockContactRepository::new());
    for name in ["Zoe", "Adam", "Mia"] {
        let mut params = bob_params();
        params.name = name.to_string();
        service.add_business_contact(params).await.unwrap();
    }

    let listing = service.list_contacts(ContactKind::Business).await;
    let entries: Vec<(usize, &str)> = listing
        .iter()
        .map(|s| (s.index, s.name.as_str()))
        .collect();

    assert_eq!(entries, vec![(0, "Zoe"), (1, "Adam"), (2, "Mia")]);
    assert!(listing.iter().all(|s| s.kind == ContactKind::Business));
    assert!(service.list_contacts(ContactKind::Personal).await.is_empty());
}

#[tokio::test]
async fn test_search_trims_and_ignores_case() {
    let mock = MockContactRepository::with_contacts(vec![
        BusinessContact::new("Bob", "555-9999", "b@x.com", "Acme", "Engineer").into(),
    ]);
    let service = service_with(&mock);

    let found = service.search_by_name("  BOB  ").await.unwrap();

    assert_eq!(found.map(|c| c.kind()), Some(ContactKind::Business));
    assert_eq!(mock.get_call_count("search_by_name"), 1);
}

#[tokio::test]
async fn test_search_blank_name_is_rejected() {
    let mock = MockContactRepository::new();
    let service = service_with(&mock);

    let err = service.search_by_name("   ").await.unwrap_err();

    assert_eq!(err, ServiceError::Validation(ValidationError::BlankSearchName));
    assert_eq!(mock.get_call_count("search_by_name"), 0);
}

#[tokio::test]
async fn test_search_not_found_is_not_an_error() {
    let service = service_with(&MockContactRepository::new());
    assert_eq!(service.search_by_name("Nobody").await, Ok(None));
}

#[tokio::test]
async fn test_remove_contact_delegates_by_kind() {
    let mock = MockContactRepository::with_contacts(vec![
        PersonalContact::new("Alice", "1", "a@x.com", "Sister").into(),
        BusinessContact::new("Bob", "2", "b@x.com", "Acme", "Engineer").into(),
    ]);
    assert_eq!(mock.get_call_count("add_personal"), 0);
    assert_eq!(mock.get_call_count("add_business"), 0);
    let service = service_with(&mock);

    let removed = service
        .remove_contact(ContactKind::Business, 0)
        .await
        .unwrap();

    assert_eq!(removed.name(), "Bob");
    assert_eq!(mock.get_call_count("remove_business"), 1);
    assert_eq!(mock.get_call_count("remove_personal"), 0);
    assert_eq!(service.list_contacts(ContactKind::Personal).await.len(), 1);
}

#[tokio::test]
async fn test_remove_out_of_range() {
    let service = service_with(&MockContactRepository::new());
    service.add_personal_contact(alice_params()).await.unwrap();

    let err = service
        .remove_contact(ContactKind::Personal, 1)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Repository(RepositoryError::IndexOutOfRange {
            kind: ContactKind::Personal,
            index: 1,
            len: 1,
        })
    );
    assert_eq!(service.list_contacts(ContactKind::Personal).await.len(), 1);
}

#[tokio::test]
async fn test_details_resolve_duplicate_names_by_position() {
    let service = service_with(&MockContactRepository::new());
    let mut first = alice_params();
    first.relation = "Sister".to_string();
    let mut second = alice_params();
    second.relation = "Cousin".to_string();
    service.add_personal_contact(first).await.unwrap();
    service.add_personal_contact(second).await.unwrap();

    let contact = service
        .get_contact_details(ContactKind::Personal, 1)
        .await
        .unwrap();

    assert!(contact.render().ends_with("Relation: Cousin"));
}

#[tokio::test]
async fn test_concurrent_adds_share_one_lock() {
    let service = Arc::new(service_with(&MockContactRepository::new()));

    let mut handles = Vec::new();
    for i in 0..16 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let mut params = bob_params();
            params.name = format!("Contact {}", i);
            service.add_business_contact(params).await.unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let listing = service.list_contacts(ContactKind::Business).await;
    assert_eq!(listing.len(), 16);
    let indices: Vec<usize> = listing.iter().map(|s| s.index).collect();
    assert_eq!(indices, (0..16).collect::<Vec<_>>());
}
