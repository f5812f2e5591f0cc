//! Data models for contact book entries.
//!
//! This module contains the closed set of contact variants (personal and
//! business) together with their shared base fields and text rendering.

pub mod contact;

pub use contact::{BusinessContact, Contact, ContactInfo, PersonalContact};
