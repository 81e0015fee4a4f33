// crates/school/src/infrastructure/postgres/rows/postgres_person_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::{DomainError, Result};
use uuid::Uuid;

use crate::domain::entities::Person;
use crate::domain::value_objects::{Email, OrganizationId, PersonId, PersonRole};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostgresPersonRow {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PostgresPersonRow> for Person {
    type Error = DomainError;

    fn try_from(row: PostgresPersonRow) -> Result<Self> {
        Ok(Person::restore(
            PersonId::from_uuid(row.id),
            OrganizationId::from_uuid(row.organization_id),
            row.first_name,
            row.last_name,
            Email::from_raw(row.email),
            row.phone,
            row.role.parse::<PersonRole>()?,
            row.created_at,
        ))
    }
}

impl From<&Person> for PostgresPersonRow {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id().as_uuid(),
            organization_id: person.organization_id().as_uuid(),
            first_name: person.first_name().to_string(),
            last_name: person.last_name().to_string(),
            email: person.email().as_str().to_string(),
            phone: person.phone().map(str::to_string),
            role: person.role().as_str().to_string(),
            created_at: person.created_at(),
        }
    }
}
