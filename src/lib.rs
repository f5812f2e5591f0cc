//! Contact Book MCP Server - an in-memory personal and business contact book
//! exposed over the Model Context Protocol.
//!
//! Contacts live in two independent ordered lists. They can be added, listed,
//! inspected and removed by position, and looked up by name across both lists.
//!
//! # Architecture
//!
//! - **models**: The closed set of contact variants and their text rendering
//! - **domain**: Contact kinds and validated form input
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: The in-memory store of both contact lists
//! - **services**: Input validation and locking around the repository
//! - **server**: MCP protocol server and tool handlers

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::{ContactKind, ValidationError};
pub use error::{ConfigError, RepositoryError, ServiceError};
pub use models::{BusinessContact, Contact, ContactInfo, PersonalContact};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::ContactBookMcpServer;
pub use services::{ContactService, ContactServiceImpl, ContactSummary};
