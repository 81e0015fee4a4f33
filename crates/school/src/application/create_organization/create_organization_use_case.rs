// crates/school/src/application/create_organization/create_organization_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::{Context, Session};
use shared_kernel::errors::Result;

use crate::application::create_organization::CreateOrganizationCommand;
use crate::domain::entities::Organization;
use crate::domain::repositories::OrganizationRepository;

pub struct CreateOrganizationUseCase {
    organization_repo: Arc<dyn OrganizationRepository>,
    session: Session,
}

impl CreateOrganizationUseCase {
    pub fn new(organization_repo: Arc<dyn OrganizationRepository>, session: Session) -> Self {
        Self { organization_repo, session }
    }

    /// Appelé seul, ouvre et finalise sa transaction.
    /// Appelé depuis un contexte transactionnel, s'y greffe sans rien finaliser.
    pub async fn execute(&self, ctx: &Context, command: CreateOrganizationCommand) -> Result<Organization> {
        // 1. VALIDATION (hors transaction)
        let organization = Organization::new(command.name)?;

        // 2. PERSISTANCE
        let (tx_ctx, manager) = self.session.begin(ctx).await?;
        let outcome = self.organization_repo.create(&tx_ctx, &organization).await;

        // 3. FINALISATION : `end` ne renvoie que ses propres échecs, l'erreur métier est propagée ici
        self.session.end(manager, outcome.as_ref().err()).await?;
        outcome?;

        tracing::info!(organization_id = %organization.id(), "Organization created");
        Ok(organization)
    }
}
