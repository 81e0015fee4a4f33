// crates/school/src/infrastructure/postgres/rows/postgres_organization_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::entities::Entity;
use uuid::Uuid;

use crate::domain::entities::Organization;
use crate::domain::value_objects::OrganizationId;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostgresOrganizationRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresOrganizationRow> for Organization {
    fn from(row: PostgresOrganizationRow) -> Self {
        Organization::restore(OrganizationId::from_uuid(row.id), row.name, row.created_at)
    }
}

impl From<&Organization> for PostgresOrganizationRow {
    fn from(organization: &Organization) -> Self {
        Self {
            id: organization.id().as_uuid(),
            name: organization.name().to_string(),
            created_at: organization.created_at(),
        }
    }
}
