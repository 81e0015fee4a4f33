// crates/school/src/domain/repositories/person_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::Result;

use crate::domain::entities::Person;
use crate::domain::value_objects::{Email, PersonId};

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create(&self, ctx: &Context, person: &Person) -> Result<()>;

    async fn find_by_id(&self, ctx: &Context, id: &PersonId) -> Result<Person>;

    async fn find_by_email(&self, ctx: &Context, email: &Email) -> Result<Option<Person>>;
}
