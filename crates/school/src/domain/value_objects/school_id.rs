// crates/school/src/domain/value_objects/school_id.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SchoolId(Uuid);

impl SchoolId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        let s = id.into();
        Self::from_str(&s)
    }
}

impl Identifier for SchoolId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for SchoolId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::Validation {
                field: "school_id",
                reason: "School ID cannot be nil".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SchoolId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SchoolId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let id = Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "school_id",
                reason: format!("'{}' is not a valid UUID", s),
            })?;
        id.validate()?;
        Ok(id)
    }
}

impl fmt::Display for SchoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
