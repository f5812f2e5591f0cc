//! ContactKind value object.

use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The list a contact lives in.
///
/// Personal and business contacts are kept in two independent sequences,
/// each with its own zero-based index space.
///
/// # Example
///
/// ```
/// use contact_book_mcp_server::domain::ContactKind;
///
/// let kind: ContactKind = "Business".parse().unwrap();
/// assert_eq!(kind, ContactKind::Business);
/// assert_eq!(kind.to_string(), "business");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Personal,
    Business,
}

impl ContactKind {
    /// Both kinds, in search order.
    pub const ALL: [ContactKind; 2] = [ContactKind::Personal, ContactKind::Business];

    /// Lowercase name used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

// Serde support - deserialize through FromStr so the wire accepts the same
// spellings as the parser and reports UnknownKind otherwise
impl<'de> Deserialize<'de> for ContactKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
