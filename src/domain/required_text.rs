//! RequiredText value object.

use super::errors::ValidationError;
use std::fmt;

/// A trimmed, non-blank piece of form input.
///
/// This is the only validation applied to contact fields: surrounding
/// whitespace is removed and the remainder must not be empty.
///
/// # Example
///
/// ```
/// use contact_book_mcp_server::domain::RequiredText;
///
/// let name = RequiredText::new("name", "  Alice ").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(RequiredText::new("name", "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredText(String);

impl RequiredText {
    /// Trim `value` and reject it if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BlankField(field)` if the trimmed value is empty.
    pub fn new(field: &'static str, value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankField(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
