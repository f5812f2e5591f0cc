//! Contact model representing a personal or business contact.

use crate::domain::ContactKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields every contact carries, whatever list it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    name: String,
    phone_number: String,
    email: String,
}

impl ContactInfo {
    /// Create the shared base fields of a contact.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn render_lines(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("Phone: {}", self.phone_number),
            format!("Email: {}", self.email),
        ]
    }
}

/// A friend, relative or other personal acquaintance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalContact {
    #[serde(flatten)]
    info: ContactInfo,

    /// How the contact is related to the owner (e.g. "Sister")
    relation: String,
}

impl PersonalContact {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            info: ContactInfo::new(name, phone_number, email),
            relation: relation.into(),
        }
    }

    pub fn info(&self) -> &ContactInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn phone_number(&self) -> &str {
        self.info.phone_number()
    }

    pub fn email(&self) -> &str {
        self.info.email()
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Render the contact as labeled lines, ending with `Relation:`.
    pub fn render(&self) -> String {
        let [name, phone, email] = self.info.render_lines();
        [name, phone, email, format!("Relation: {}", self.relation)].join("\n")
    }
}

/// A colleague, client or other work contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessContact {
    #[serde(flatten)]
    info: ContactInfo,

    company_name: String,

    job_title: String,
}

impl BusinessContact {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        company_name: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Self {
        Self {
            info: ContactInfo::new(name, phone_number, email),
            company_name: company_name.into(),
            job_title: job_title.into(),
        }
    }

    pub fn info(&self) -> &ContactInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn phone_number(&self) -> &str {
        self.info.phone_number()
    }

    pub fn email(&self) -> &str {
        self.info.email()
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    /// Render the contact as labeled lines, ending with `Company:` and `Job Title:`.
    pub fn render(&self) -> String {
        let [name, phone, email] = self.info.render_lines();
        [
            name,
            phone,
            email,
            format!("Company: {}", self.company_name),
            format!("Job Title: {}", self.job_title),
        ]
        .join("\n")
    }
}

/// A contact in the contact book.
///
/// The set of variants is closed; every operation that differs between
/// personal and business contacts dispatches on this enum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Contact {
    Personal(PersonalContact),
    Business(BusinessContact),
}

impl Contact {
    /// Which list this contact belongs to.
    pub fn kind(&self) -> ContactKind {
        match self {
            Self::Personal(_) => ContactKind::Personal,
            Self::Business(_) => ContactKind::Business,
        }
    }

    /// The base fields shared by both variants.
    pub fn info(&self) -> &ContactInfo {
        match self {
            Self::Personal(contact) => contact.info(),
            Self::Business(contact) => contact.info(),
        }
    }

    pub fn name(&self) -> &str {
        self.info().name()
    }

    pub fn phone_number(&self) -> &str {
        self.info().phone_number()
    }

    pub fn email(&self) -> &str {
        self.info().email()
    }

    /// Multi-line, human-readable summary of every field.
    ///
    /// Lines are `Name:`, `Phone:`, `Email:` followed by the variant's own
    /// fields, joined with `\n` and without a trailing newline.
    pub fn render(&self) -> String {
        match self {
            Self::Personal(contact) => contact.render(),
            Self::Business(contact) => contact.render(),
        }
    }

    /// Case-insensitive comparison of this contact's name against `name`.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name()
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }
}

impl From<PersonalContact> for Contact {
    fn from(contact: PersonalContact) -> Self {
        Self::Personal(contact)
    }
}

impl From<BusinessContact> for Contact {
    fn from(contact: BusinessContact) -> Self {
        Self::Business(contact)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
