// crates/school/src/application/register_school/register_school_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::{Context, Session};
use shared_kernel::errors::Result;

use crate::application::create_organization::{CreateOrganizationCommand, CreateOrganizationUseCase};
use crate::application::register_school::{RegisterSchoolCommand, RegisteredSchool};
use crate::domain::entities::School;
use crate::domain::repositories::SchoolRepository;

pub struct RegisterSchoolUseCase {
    create_organization: Arc<CreateOrganizationUseCase>,
    school_repo: Arc<dyn SchoolRepository>,
    session: Session,
}

impl RegisterSchoolUseCase {
    pub fn new(
        create_organization: Arc<CreateOrganizationUseCase>,
        school_repo: Arc<dyn SchoolRepository>,
        session: Session,
    ) -> Self {
        Self { create_organization, school_repo, session }
    }

    pub async fn execute(&self, ctx: &Context, command: RegisterSchoolCommand) -> Result<RegisteredSchool> {
        let RegisterSchoolCommand { organization_name, school_name } = command;

        let registered = self
            .session
            .run_in_transaction(ctx, |tx_ctx| async move {
                // Use case imbriqué : il reçoit un manager emprunté, seul ce niveau finalise
                let organization = self
                    .create_organization
                    .execute(&tx_ctx, CreateOrganizationCommand { name: organization_name })
                    .await?;

                let school = School::new(*organization.id(), school_name)?;
                self.school_repo.create(&tx_ctx, &school).await?;

                Ok(RegisteredSchool { organization, school })
            })
            .await?;

        tracing::info!(
            organization_id = %registered.organization.id(),
            school_id = %registered.school.id(),
            "School registered"
        );
        Ok(registered)
    }
}
