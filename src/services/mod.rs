//! Application service layer.
//!
//! Services contain business logic and sit between the MCP handlers and the
//! repository. They validate form input and own the lock that makes the
//! repository safe to share.

mod contact_service;

pub use contact_service::{
    BusinessContactParams, ContactService, ContactServiceImpl, ContactSummary,
    PersonalContactParams,
};

// Re-export common types used by services
pub use crate::domain::ContactKind;
pub use crate::models::Contact;
