// crates/school/tests/repositories/organization_repository_it.rs

use school::domain::entities::Organization;
use school::domain::repositories::OrganizationRepository;
use school::domain::value_objects::OrganizationId;
use school::infrastructure::postgres::repositories::PostgresOrganizationRepository;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::DomainError;

#[tokio::test]
async fn test_organization_lifecycle() {
    let (session, _db) = crate::common::setup_session().await;
    let repo = PostgresOrganizationRepository::new(session);
    let ctx = Context::background();

    let organization = Organization::new("Académie de Lyon").unwrap();
    repo.create(&ctx, &organization).await.unwrap();

    let found = repo.find_by_id(&ctx, organization.id()).await.unwrap();
    assert_eq!(found.name(), "Académie de Lyon");

    repo.rename(&ctx, organization.id(), "Académie de Grenoble").await.unwrap();
    let renamed = repo.find_by_id(&ctx, organization.id()).await.unwrap();
    assert_eq!(renamed.name(), "Académie de Grenoble");
}

#[tokio::test]
async fn test_duplicate_name_maps_to_already_exists() {
    let (session, _db) = crate::common::setup_session().await;
    let repo = PostgresOrganizationRepository::new(session);
    let ctx = Context::background();

    repo.create(&ctx, &Organization::new("Académie de Lyon").unwrap()).await.unwrap();
    let err = repo
        .create(&ctx, &Organization::new("Académie de Lyon").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::AlreadyExists { entity: "Organization", field: "name" });
}

#[tokio::test]
async fn test_zero_rows_is_not_found() {
    let (session, _db) = crate::common::setup_session().await;
    let repo = PostgresOrganizationRepository::new(session);
    let ctx = Context::background();
    let unknown = OrganizationId::new();

    assert_eq!(repo.find_by_id(&ctx, &unknown).await.unwrap_err(), DomainError::NotFound);
    assert_eq!(repo.rename(&ctx, &unknown, "Nope").await.unwrap_err(), DomainError::NotFound);
}
