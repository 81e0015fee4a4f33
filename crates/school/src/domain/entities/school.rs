// crates/school/src/domain/entities/school.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::errors::Result;

use crate::domain::entities::name::validated_name;
use crate::domain::value_objects::{OrganizationId, SchoolId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    id: SchoolId,
    organization_id: OrganizationId,
    name: String,
    created_at: DateTime<Utc>,
}

impl School {
    pub fn new(organization_id: OrganizationId, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: SchoolId::new(),
            organization_id,
            name: validated_name("name", name)?,
            created_at: Utc::now(),
        })
    }

    pub fn restore(
        id: SchoolId,
        organization_id: OrganizationId,
        name: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, organization_id, name, created_at }
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl EntityMetadata for School {
    fn entity_name() -> &'static str {
        "School"
    }
}

impl Entity for School {
    type Id = SchoolId;

    fn id(&self) -> &SchoolId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
