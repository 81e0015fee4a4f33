#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::entities::Entity;
    use shared_kernel::domain::transaction::{Context, Session, StubTransactionSource};
    use shared_kernel::errors::DomainError;

    use crate::application::create_organization::CreateOrganizationUseCase;
    use crate::application::register_school::{RegisterSchoolCommand, RegisterSchoolUseCase};
    use crate::domain::repositories::{OrganizationRepositoryStub, SchoolRepositoryStub};

    struct Fixture {
        use_case: RegisterSchoolUseCase,
        organization_repo: Arc<OrganizationRepositoryStub>,
        school_repo: Arc<SchoolRepositoryStub>,
        source: Arc<StubTransactionSource>,
    }

    fn setup() -> Fixture {
        let organization_repo = Arc::new(OrganizationRepositoryStub::new());
        let school_repo = Arc::new(SchoolRepositoryStub::new());
        let source = Arc::new(StubTransactionSource::new());
        let session = Session::new(source.clone());

        let create_organization = Arc::new(CreateOrganizationUseCase::new(organization_repo.clone(), session.clone()));
        let use_case = RegisterSchoolUseCase::new(create_organization, school_repo.clone(), session);

        Fixture { use_case, organization_repo, school_repo, source }
    }

    fn command() -> RegisterSchoolCommand {
        RegisterSchoolCommand {
            organization_name: "Académie de Lyon".to_string(),
            school_name: "Lycée Ampère".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_school_uses_a_single_transaction() {
        let f = setup();

        let registered = f.use_case.execute(&Context::background(), command()).await.unwrap();

        assert_eq!(registered.school.organization_id(), registered.organization.id());
        assert_eq!(f.source.log.begun(), 1);
        assert_eq!(f.source.log.committed(), 1);
        assert_eq!(f.source.log.rolled_back(), 0);
        assert_eq!(f.school_repo.schools.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_school_failure_rolls_back_the_whole_unit() {
        let f = setup();
        *f.school_repo.error_to_return.lock().unwrap() =
            Some(DomainError::ReferenceNotFound { entity: "Organization" });

        let result = f.use_case.execute(&Context::background(), command()).await;

        assert_eq!(result.unwrap_err(), DomainError::ReferenceNotFound { entity: "Organization" });
        assert_eq!(f.source.log.begun(), 1);
        assert_eq!(f.source.log.committed(), 0);
        assert_eq!(f.source.log.rolled_back(), 1);
    }

    #[tokio::test]
    async fn test_nested_use_case_error_is_propagated_once() {
        let f = setup();
        let ctx = Context::background();
        f.use_case.execute(&ctx, command()).await.unwrap();

        let again = RegisterSchoolCommand { school_name: "Lycée du Parc".to_string(), ..command() };
        let result = f.use_case.execute(&ctx, again).await;

        assert_eq!(
            result.unwrap_err(),
            DomainError::AlreadyExists { entity: "Organization", field: "name" }
        );
        // Le manager emprunté du use case imbriqué n'a rien finalisé
        assert_eq!(f.source.log.begun(), 2);
        assert_eq!(f.source.log.committed(), 1);
        assert_eq!(f.source.log.rolled_back(), 1);
        assert_eq!(f.organization_repo.organizations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_runs_inside_caller_transaction() {
        let f = setup();
        let session = Session::new(f.source.clone());
        let ctx = Context::background();

        let (tx_ctx, manager) = session.begin(&ctx).await.unwrap();
        f.use_case.execute(&tx_ctx, command()).await.unwrap();
        assert_eq!(f.source.log.committed(), 0);

        session.end(manager, None).await.unwrap();
        assert_eq!(f.source.log.begun(), 1);
        assert_eq!(f.source.log.committed(), 1);
    }
}
