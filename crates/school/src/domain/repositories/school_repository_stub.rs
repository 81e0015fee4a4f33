// crates/school/src/domain/repositories/school_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::School;
use crate::domain::repositories::SchoolRepository;
use crate::domain::value_objects::{OrganizationId, SchoolId};

#[derive(Default)]
pub struct SchoolRepositoryStub {
    pub schools: Arc<Mutex<HashMap<SchoolId, School>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl SchoolRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl SchoolRepository for SchoolRepositoryStub {
    async fn create(&self, _ctx: &Context, school: &School) -> Result<()> {
        self.check_error()?;
        let mut schools = self.schools.lock().unwrap();
        let taken = schools
            .values()
            .any(|s| s.organization_id() == school.organization_id() && s.name() == school.name());
        if taken {
            return Err(School::already_exists("name"));
        }
        schools.insert(*school.id(), school.clone());
        Ok(())
    }

    async fn find_by_id(&self, _ctx: &Context, id: &SchoolId) -> Result<School> {
        self.check_error()?;
        self.schools.lock().unwrap().get(id).cloned().ok_or(DomainError::NotFound)
    }

    async fn list_by_organization(&self, _ctx: &Context, organization_id: &OrganizationId) -> Result<Vec<School>> {
        self.check_error()?;
        Ok(self.schools.lock().unwrap().values()
            .filter(|s| s.organization_id() == organization_id)
            .cloned()
            .collect())
    }
}
