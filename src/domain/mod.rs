//! Domain value objects and types.
//!
//! This module contains the small vocabulary shared by every layer: which of
//! the two contact lists an entry belongs to, and the trimmed, non-blank text
//! that form input must reduce to before a contact can be constructed.

pub mod contact_kind;
pub mod errors;
pub mod required_text;

pub use contact_kind::ContactKind;
pub use errors::ValidationError;
pub use required_text::RequiredText;
