// crates/school/src/infrastructure/postgres/repositories/postgres_person_repository.rs

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
use crate::domain::entities::Person;
use crate::domain::repositories::PersonRepository;
use crate::domain::value_objects::{Email, PersonId};
use crate::infrastructure::postgres::rows::PostgresPersonRow;

const SELECT_PERSON: &str =
    "SELECT id, organization_id, first_name, last_name, email, phone, role, created_at FROM persons";

static INSERT_PERSON: Lazy<NamedQuery> = Lazy::new(|| {
    NamedQuery::parse(
        "INSERT INTO persons (id, organization_id, first_name, last_name, email, phone, role, created_at) \
         VALUES (:id, :organization_id, :first_name, :last_name, :email, :phone, :role, :created_at)",
    )
});

pub struct PostgresPersonRepository {
    session: Arc<PostgresSession>,
}

impl PostgresPersonRepository {
    pub fn new(session: Arc<PostgresSession>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn create(&self, ctx: &Context, person: &Person) -> Result<()> {
        let (db, _) = self.session.extract(ctx);
        let row = PostgresPersonRow::from(person);

        db.exec_named(&INSERT_PERSON, |query, name| match name {
            "id" => query.bind(row.id),
            "organization_id" => query.bind(row.organization_id),
            "first_name" => query.bind(row.first_name.clone()),
            "last_name" => query.bind(row.last_name.clone()),
            "email" => query.bind(row.email.clone()),
            "phone" => query.bind(row.phone.clone()),
            "role" => query.bind(row.role.clone()),
            "created_at" => query.bind(row.created_at),
            _ => query,
        })
        .await
        .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Ok(())
    }

    async fn find_by_id(&self, ctx: &Context, id: &PersonId) -> Result<Person> {
        let (db, _) = self.session.extract(ctx);
        let sql = format!("{SELECT_PERSON} WHERE id = $1");

        let row = db
            .get(query_as::<_, PostgresPersonRow>(&sql).bind(id.as_uuid()))
            .await
            .map_domain(&*SCHOOL_CONSTRAINTS)?;

        Person::try_from(row)
    }

    async fn find_by_email(&self, ctx: &Context, email: &Email) -> Result<Option<Person>> {
        let (db, _) = self.session.extract(ctx);
        let sql = format!("{SELECT_PERSON} WHERE email = $1");

        let row = db
            .get_optional(query_as::<_, PostgresPersonRow>(&sql).bind(email.as_str().to_string()))
            .await
            .map_domain(&*SCHOOL_CONSTRAINTS)?;

        row.map(Person::try_from).transpose()
    }
}
