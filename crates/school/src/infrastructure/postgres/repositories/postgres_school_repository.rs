// crates/school/src/infrastructure/postgres/repositories/postgres_school_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::executor::NamedQuery;
use shared_kernel::infrastructure::postgres::mappers::StoreErrorExt;
use shared_kernel::infrastructure::postgres::session::PostgresSession;
use sqlx::query_as;

use crate::domain::constraints::SCHOOL_CONSTRAINTS;
use crate::domain::entities::School;
use crate::domain::repositories::SchoolRepository;
use crate::domain::value_objects::{OrganizationId, SchoolId};
use crate::infrastructure::postgres::rows::PostgresSchoolRow;

static INSERT_SCHOOL: Lazy<NamedQuery> = Lazy::new(|| {
    NamedQuery::parse(
        "INSERT INTO schools (id, organization_id, name, created_at) \
         VALUES (:id, :organization_id, :name, :created_at)",
    )
});

pub struct PostgresSchoolRepository {
    session: Arc<PostgresSession>,
}

impl PostgresSchoolRepository {
    pub fn new(session: Arc<PostgresSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl SchoolRepository for PostgresSchoolRepository {
    async fn create(&self, ctx: &Context, school: &School) -> Result<()> {
        let (db, _) = self.session.extract(ctx);
        let row = PostgresSchoolRow::from(school);

        db.exec_named(&INSERT_SCHOOL, |query, name| match name {
            "id" => query.bind(row.id),
            "organization_id" => query.bind(row.organization_id),
            "name" => query.bind(row.name.clone()),
            "created_at" => query.bind(row.created_at),
            _ => query,
        })
        .await
        .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Ok(())
    }

    async fn find_by_id(&self, ctx: &Context, id: &SchoolId) -> Result<School> {
        let (db, _) = self.session.extract(ctx);

        let row = db
            .get(
                query_as::<_, PostgresSchoolRow>(
                    "SELECT id, organization_id, name, created_at FROM schools WHERE id = $1",
                )
                .bind(id.as_uuid()),
            )
            .await
            .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Ok(row.into())
    }

    async fn list_by_organization(&self, ctx: &Context, organization_id: &OrganizationId) -> Result<Vec<School>> {
        let (db, _) = self.session.extract(ctx);

        let rows = db
            .select(
                query_as::<_, PostgresSchoolRow>(
                    "SELECT id, organization_id, name, created_at FROM schools \
                     WHERE organization_id = $1 ORDER BY name",
                )
                .bind(organization_id.as_uuid()),
            )
            .await
            .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Ok(rows.into_iter().map(School::from).collect())
    }
}
