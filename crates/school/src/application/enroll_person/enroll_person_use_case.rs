// crates/school/src/application/enroll_person/enroll_person_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::{Entity, EntityMetadata};
use shared_kernel::domain::transaction::{Context, Session};
use shared_kernel::errors::{DomainError, Result};

use crate::application::enroll_person::EnrollPersonCommand;
use crate::domain::entities::{Organization, Person};
use crate::domain::repositories::{OrganizationRepository, PersonRepository};
use crate::domain::value_objects::Email;

pub struct EnrollPersonUseCase {
    organization_repo: Arc<dyn OrganizationRepository>,
    person_repo: Arc<dyn PersonRepository>,
    session: Session,
}

impl EnrollPersonUseCase {
    pub fn new(
        organization_repo: Arc<dyn OrganizationRepository>,
        person_repo: Arc<dyn PersonRepository>,
        session: Session,
    ) -> Self {
        Self { organization_repo, person_repo, session }
    }

    pub async fn execute(&self, ctx: &Context, command: EnrollPersonCommand) -> Result<Person> {
        // 1. VALIDATION
        let email = Email::try_new(command.email)?;
        let mut person = Person::new(
            command.organization_id,
            command.first_name,
            command.last_name,
            email,
            command.role,
        )?;
        if let Some(phone) = command.phone {
            person = person.with_phone(phone)?;
        }

        // 2. PERSISTANCE
        let person = self
            .session
            .run_in_transaction(ctx, |tx_ctx| async move {
                // Verrou sur l'organisation : elle ne peut pas disparaître pendant l'inscription
                self.organization_repo
                    .find_by_id(&tx_ctx, person.organization_id())
                    .await
                    .map_err(|e| match e {
                        DomainError::NotFound => Organization::reference_not_found(),
                        other => other,
                    })?;

                if self.person_repo.find_by_email(&tx_ctx, person.email()).await?.is_some() {
                    return Err(Person::already_exists("email"));
                }

                self.person_repo.create(&tx_ctx, &person).await?;
                Ok(person)
            })
            .await?;

        tracing::info!(person_id = %person.id(), role = %person.role(), "Person enrolled");
        Ok(person)
    }
}
