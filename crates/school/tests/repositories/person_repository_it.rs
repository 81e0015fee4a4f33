// crates/school/tests/repositories/person_repository_it.rs

use school::domain::entities::{Organization, Person};
use school::domain::repositories::{OrganizationRepository, PersonRepository};
use school::domain::value_objects::{Email, OrganizationId, PersonRole};
use school::infrastructure::postgres::repositories::{PostgresOrganizationRepository, PostgresPersonRepository};
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::DomainError;

fn person(organization_id: OrganizationId, email: &str) -> Person {
    Person::new(
        organization_id,
        "Jeanne",
        "Martin",
        Email::try_new(email).unwrap(),
        PersonRole::Teacher,
    )
    .unwrap()
}

#[tokio::test]
async fn test_person_roundtrip_and_unique_keys() {
    let (session, _db) = crate::common::setup_session().await;
    let organizations = PostgresOrganizationRepository::new(session.clone());
    let repo = PostgresPersonRepository::new(session);
    let ctx = Context::background();

    let organization = Organization::new("Académie de Lyon").unwrap();
    organizations.create(&ctx, &organization).await.unwrap();

    let jeanne = person(*organization.id(), "jeanne@lycee.fr").with_phone("+33612345678").unwrap();
    repo.create(&ctx, &jeanne).await.unwrap();

    let found = repo.find_by_email(&ctx, jeanne.email()).await.unwrap().unwrap();
    assert_eq!(found.id(), jeanne.id());
    assert_eq!(found.role(), PersonRole::Teacher);
    assert_eq!(repo.find_by_id(&ctx, jeanne.id()).await.unwrap().phone(), Some("+33612345678"));

    let same_email = person(*organization.id(), "jeanne@lycee.fr");
    assert_eq!(
        repo.create(&ctx, &same_email).await.unwrap_err(),
        DomainError::AlreadyExists { entity: "Person", field: "email" }
    );

    let same_phone = person(*organization.id(), "other@lycee.fr").with_phone("+33612345678").unwrap();
    assert_eq!(
        repo.create(&ctx, &same_phone).await.unwrap_err(),
        DomainError::AlreadyExists { entity: "Person", field: "phone" }
    );
}

#[tokio::test]
async fn test_unknown_email_is_none() {
    let (session, _db) = crate::common::setup_session().await;
    let repo = PostgresPersonRepository::new(session);

    let found = repo
        .find_by_email(&Context::background(), &Email::try_new("ghost@void.fr").unwrap())
        .await
        .unwrap();
    assert!(found.is_none());
}
