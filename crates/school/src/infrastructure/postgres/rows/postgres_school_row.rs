// crates/school/src/infrastructure/postgres/rows/postgres_school_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::entities::Entity;
use uuid::Uuid;

use crate::domain::entities::School;
use crate::domain::value_objects::{OrganizationId, SchoolId};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostgresSchoolRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresSchoolRow> for School {
    fn from(row: PostgresSchoolRow) -> Self {
        School::restore(
            SchoolId::from_uuid(row.id),
            OrganizationId::from_uuid(row.organization_id),
            row.name,
            row.created_at,
        )
    }
}

impl From<&School> for PostgresSchoolRow {
    fn from(school: &School) -> Self {
        Self {
            id: school.id().as_uuid(),
            organization_id: school.organization_id().as_uuid(),
            name: school.name().to_string(),
            created_at: school.created_at(),
        }
    }
}
