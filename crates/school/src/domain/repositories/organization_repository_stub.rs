// crates/school/src/domain/repositories/organization_repository_stub.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Organization;
use crate::domain::repositories::OrganizationRepository;
use crate::domain::value_objects::OrganizationId;

#[derive(Default)]
pub struct OrganizationRepositoryStub {
    pub organizations: Arc<Mutex<HashMap<OrganizationId, Organization>>>,
    /// Erreur forcée, renvoyée par n'importe quelle méthode
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    /// Contextes vus par `create` : transactionnels ou non
    pub seen_in_transaction: Arc<Mutex<Vec<bool>>>,
}

impl OrganizationRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_organization(&self, organization: Organization) {
        self.organizations.lock().unwrap().insert(*organization.id(), organization);
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl OrganizationRepository for OrganizationRepositoryStub {
    async fn create(&self, ctx: &Context, organization: &Organization) -> Result<()> {
        self.check_error()?;
        self.seen_in_transaction.lock().unwrap().push(ctx.in_transaction());

        let mut organizations = self.organizations.lock().unwrap();
        // Équivalent de organizations_name_key
        if organizations.values().any(|o| o.name() == organization.name()) {
            return Err(Organization::already_exists("name"));
        }
        organizations.insert(*organization.id(), organization.clone());
        Ok(())
    }

    async fn find_by_id(&self, _ctx: &Context, id: &OrganizationId) -> Result<Organization> {
        self.check_error()?;
        self.organizations.lock().unwrap().get(id).cloned().ok_or(DomainError::NotFound)
    }

    async fn rename(&self, _ctx: &Context, id: &OrganizationId, name: &str) -> Result<()> {
        self.check_error()?;
        let mut organizations = self.organizations.lock().unwrap();
        let current = organizations.get(id).cloned().ok_or(DomainError::NotFound)?;
        let renamed = Organization::restore(*current.id(), name.to_string(), current.created_at());
        organizations.insert(*id, renamed);
        Ok(())
    }
}
