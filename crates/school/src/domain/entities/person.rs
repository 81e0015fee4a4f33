// crates/school/src/domain/entities/person.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::name::validated_name;
use crate::domain::value_objects::{Email, OrganizationId, PersonId, PersonRole};

/// Élève, enseignant ou personnel d'une organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    organization_id: OrganizationId,
    first_name: String,
    last_name: String,
    email: Email,
    phone: Option<String>,
    role: PersonRole,
    created_at: DateTime<Utc>,
}

impl Person {
    pub fn new(
        organization_id: OrganizationId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        role: PersonRole,
    ) -> Result<Self> {
        Ok(Self {
            id: PersonId::new(),
            organization_id,
            first_name: validated_name("first_name", first_name)?,
            last_name: validated_name("last_name", last_name)?,
            email,
            phone: None,
            role,
            created_at: Utc::now(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: PersonId,
        organization_id: OrganizationId,
        first_name: String,
        last_name: String,
        email: Email,
        phone: Option<String>,
        role: PersonRole,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, organization_id, first_name, last_name, email, phone, role, created_at }
    }

    /// Numéro au format E.164 (`+` puis 8 à 15 chiffres)
    pub fn with_phone(mut self, phone: impl Into<String>) -> Result<Self> {
        let phone = phone.into().replace([' ', '.', '-'], "");
        let digits = phone.strip_prefix('+').unwrap_or_default();
        if !(8..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::Validation {
                field: "phone",
                reason: "Phone number must be in E.164 format".to_string(),
            });
        }
        self.phone = Some(phone);
        Ok(self)
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn role(&self) -> PersonRole {
        self.role
    }
}

impl EntityMetadata for Person {
    fn entity_name() -> &'static str {
        "Person"
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &PersonId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
