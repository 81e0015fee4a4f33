// crates/school/src/infrastructure/postgres/repositories/postgres_organization_repository.rs

use std::sync::Arc;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::executor::NamedQuery;
use shared_kernel::infrastructure::postgres::mappers::StoreErrorExt;
use shared_kernel::infrastructure::postgres::session::PostgresSession;
use sqlx::query_as;

use crate::domain::constraints::SCHOOL_CONSTRAINTS;
use crate::domain::entities::Organization;
use crate::domain::repositories::OrganizationRepository;
use crate::domain::value_objects::OrganizationId;
use crate::infrastructure::postgres::rows::PostgresOrganizationRow;

static INSERT_ORGANIZATION: Lazy<NamedQuery> = Lazy::new(|| {
    NamedQuery::parse("INSERT INTO organizations (id, name, created_at) VALUES (:id, :name, :created_at)")
});

static RENAME_ORGANIZATION: Lazy<NamedQuery> =
    Lazy::new(|| NamedQuery::parse("UPDATE organizations SET name = :name WHERE id = :id"));

pub struct PostgresOrganizationRepository {
    session: Arc<PostgresSession>,
}

impl PostgresOrganizationRepository {
    pub fn new(session: Arc<PostgresSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn create(&self, ctx: &Context, organization: &Organization) -> Result<()> {
        let (db, _) = self.session.extract(ctx);
        let row = PostgresOrganizationRow::from(organization);

        db.exec_named(&INSERT_ORGANIZATION, |query, name| match name {
            "id" => query.bind(row.id),
            "name" => query.bind(row.name.clone()),
            "created_at" => query.bind(row.created_at),
            _ => query,
        })
        .await
        .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Ok(())
    }

    async fn find_by_id(&self, ctx: &Context, id: &OrganizationId) -> Result<Organization> {
        let (db, in_tx) = self.session.extract(ctx);

        // Verrou de ligne uniquement si on est dans une transaction
        let sql = if in_tx {
            "SELECT id, name, created_at FROM organizations WHERE id = $1 FOR UPDATE"
        } else {
            "SELECT id, name, created_at FROM organizations WHERE id = $1"
        };

        let row = db
            .get(query_as::<_, PostgresOrganizationRow>(sql).bind(id.as_uuid()))
            .await
            .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Ok(row.into())
    }

    async fn rename(&self, ctx: &Context, id: &OrganizationId, name: &str) -> Result<()> {
        let (db, _) = self.session.extract(ctx);
        let uid = id.as_uuid();
        let new_name = name.to_string();

        let result = db
            .exec_named(&RENAME_ORGANIZATION, |query, param| match param {
                "id" => query.bind(uid),
                "name" => query.bind(new_name.clone()),
                _ => query,
            })
            .await
            .map_domain(&*SCHOOL_CONSTRAINTS)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}
