// crates/school/src/domain/repositories/school_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::Result;

use crate::domain::entities::School;
use crate::domain::value_objects::{OrganizationId, SchoolId};

#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Organisation inconnue : `ReferenceNotFound { entity: "Organization" }`.
    /// Nom déjà utilisé dans l'organisation : `AlreadyExists { entity: "School", field: "name" }`.
    async fn create(&self, ctx: &Context, school: &School) -> Result<()>;

    async fn find_by_id(&self, ctx: &Context, id: &SchoolId) -> Result<School>;

    async fn list_by_organization(&self, ctx: &Context, organization_id: &OrganizationId) -> Result<Vec<School>>;
}
