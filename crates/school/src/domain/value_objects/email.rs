// crates/school/src/domain/value_objects/email.rs

use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// Forme simplifiée de la RFC 5322, suffisante pour les annuaires d'établissement
static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").ok()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub const MAX_LEN: usize = 254;

    /// Normalise (trim + minuscules) puis valide
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let email = Self(value.into().trim().to_lowercase());
        email.validate()?;
        Ok(email)
    }

    /// Reconstruction depuis la DB, sans validation
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    fn validate(&self) -> Result<()> {
        let len = self.0.len();
        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "email",
                reason: format!("Email length must be between 1 and {} chars", Self::MAX_LEN),
            });
        }

        let matches = EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(&self.0));
        if !matches {
            return Err(DomainError::Validation {
                field: "email",
                reason: "Invalid email format".to_string(),
            });
        }
        Ok(())
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
