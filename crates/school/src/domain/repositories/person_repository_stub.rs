// crates/school/src/domain/repositories/person_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Person;
use crate::domain::repositories::PersonRepository;
use crate::domain::value_objects::{Email, PersonId};

#[derive(Default)]
pub struct PersonRepositoryStub {
    pub persons: Arc<Mutex<HashMap<PersonId, Person>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl PersonRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&self, person: Person) {
        self.persons.lock().unwrap().insert(*person.id(), person);
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl PersonRepository for PersonRepositoryStub {
    async fn create(&self, _ctx: &Context, person: &Person) -> Result<()> {
        self.check_error()?;
        let mut persons = self.persons.lock().unwrap();
        if persons.values().any(|p| p.email() == person.email()) {
            return Err(Person::already_exists("email"));
        }
        persons.insert(*person.id(), person.clone());
        Ok(())
    }

    async fn find_by_id(&self, _ctx: &Context, id: &PersonId) -> Result<Person> {
        self.check_error()?;
        self.persons.lock().unwrap().get(id).cloned().ok_or(DomainError::NotFound)
    }

    async fn find_by_email(&self, _ctx: &Context, email: &Email) -> Result<Option<Person>> {
        self.check_error()?;
        Ok(self.persons.lock().unwrap().values().find(|p| p.email() == email).cloned())
    }
}
