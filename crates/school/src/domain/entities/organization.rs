// crates/school/src/domain/entities/organization.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::errors::Result;

use crate::domain::entities::name::validated_name;
use crate::domain::value_objects::OrganizationId;

/// Tenant racine : toutes les écoles et personnes lui appartiennent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    id: OrganizationId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: OrganizationId::new(),
            name: validated_name("name", name)?,
            created_at: Utc::now(),
        })
    }

    pub fn restore(id: OrganizationId, name: String, created_at: DateTime<Utc>) -> Self {
        Self { id, name, created_at }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EntityMetadata for Organization {
    fn entity_name() -> &'static str {
        "Organization"
    }
}

impl Entity for Organization {
    type Id = OrganizationId;

    fn id(&self) -> &OrganizationId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
