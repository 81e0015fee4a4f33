// crates/school/src/domain/repositories/organization_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::Result;

use crate::domain::entities::Organization;
use crate::domain::value_objects::OrganizationId;

/// Toutes les méthodes reçoivent le `Context` : dans une transaction si le contexte en porte une,
/// sur le pool sinon. Le repository ne le sait pas et n'a pas à le savoir.
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// `AlreadyExists { entity: "Organization", field: "name" }` si le nom est pris
    async fn create(&self, ctx: &Context, organization: &Organization) -> Result<()>;

    /// `NotFound` si absente
    async fn find_by_id(&self, ctx: &Context, id: &OrganizationId) -> Result<Organization>;

    async fn rename(&self, ctx: &Context, id: &OrganizationId, name: &str) -> Result<()>;
}
