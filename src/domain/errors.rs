//! Domain validation errors.

use std::fmt;

/// Errors raised when caller input cannot be turned into domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required form field was empty or whitespace only.
    BlankField(&'static str),

    /// A search was requested without a name.
    BlankSearchName,

    /// The provided contact kind is neither "personal" nor "business".
    UnknownKind(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankField(field) => {
                write!(f, "All fields must be filled ({} is blank)", field)
            }
            Self::BlankSearchName => write!(f, "Please enter a name to search"),
            Self::UnknownKind(kind) => write!(
                f,
                "Unknown contact kind: {} (expected \"personal\" or \"business\")",
                kind
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
