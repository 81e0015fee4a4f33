// crates/school/tests/repositories/school_repository_it.rs

use school::domain::entities::{Organization, School};
use school::domain::repositories::{OrganizationRepository, SchoolRepository};
use school::domain::value_objects::OrganizationId;
use school::infrastructure::postgres::repositories::{PostgresOrganizationRepository, PostgresSchoolRepository};
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::DomainError;

#[tokio::test]
async fn test_unknown_organization_is_reference_not_found() {
    let (session, _db) = crate::common::setup_session().await;
    let repo = PostgresSchoolRepository::new(session);

    let school = School::new(OrganizationId::new(), "Lycée Ampère").unwrap();
    let err = repo.create(&Context::background(), &school).await.unwrap_err();

    assert_eq!(err, DomainError::ReferenceNotFound { entity: "Organization" });
}

#[tokio::test]
async fn test_school_names_are_unique_per_organization() {
    let (session, _db) = crate::common::setup_session().await;
    let organizations = PostgresOrganizationRepository::new(session.clone());
    let repo = PostgresSchoolRepository::new(session);
    let ctx = Context::background();

    let lyon = Organization::new("Académie de Lyon").unwrap();
    let grenoble = Organization::new("Académie de Grenoble").unwrap();
    organizations.create(&ctx, &lyon).await.unwrap();
    organizations.create(&ctx, &grenoble).await.unwrap();

    repo.create(&ctx, &School::new(*lyon.id(), "Lycée Ampère").unwrap()).await.unwrap();
    repo.create(&ctx, &School::new(*lyon.id(), "Lycée du Parc").unwrap()).await.unwrap();
    // Même nom, autre organisation : autorisé
    repo.create(&ctx, &School::new(*grenoble.id(), "Lycée Ampère").unwrap()).await.unwrap();

    let err = repo
        .create(&ctx, &School::new(*lyon.id(), "Lycée Ampère").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::AlreadyExists { entity: "School", field: "name" });

    let names: Vec<String> = repo
        .list_by_organization(&ctx, lyon.id())
        .await
        .unwrap()
        .iter()
        .map(|s| s.name().to_string())
        .collect();
    assert_eq!(names, ["Lycée Ampère", "Lycée du Parc"]);
}
