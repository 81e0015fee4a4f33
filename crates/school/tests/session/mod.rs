// crates/school/tests/session/mod.rs

use std::sync::Arc;
use std::time::Duration;
use school::application::create_organization::CreateOrganizationUseCase;
use school::application::register_school::{RegisterSchoolCommand, RegisterSchoolUseCase};
use school::domain::constraints::SCHOOL_CONSTRAINTS;
use school::domain::entities::Organization;
use school::domain::repositories::{OrganizationRepository, SchoolRepository};
use school::infrastructure::postgres::repositories::{PostgresOrganizationRepository, PostgresSchoolRepository};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::entities::Entity;
use shared_kernel::domain::transaction::Context;
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::postgres::executor::{DbHandle, StoreError};
use shared_kernel::infrastructure::postgres::mappers::StoreErrorExt;
use sqlx::{Row, Statement};

#[tokio::test]
async fn test_rollback_discards_writes() {
    let (session, _db) = crate::common::setup_session().await;
    let repo = PostgresOrganizationRepository::new(session.clone());
    let root = Context::background();
    let organization = Organization::new("Académie de Lyon").unwrap();

    let (ctx, manager) = session.begin(&root).await.unwrap();
    repo.create(&ctx, &organization).await.unwrap();
    // Visible dans la transaction
    assert!(repo.find_by_id(&ctx, organization.id()).await.is_ok());

    let business = DomainError::Internal("abort".into());
    session.end(manager, Some(&business)).await.unwrap();

    assert_eq!(repo.find_by_id(&root, organization.id()).await.unwrap_err(), DomainError::NotFound);
}

#[tokio::test]
async fn test_nested_begin_shares_one_physical_transaction() {
    let (session, _db) = crate::common::setup_session().await;
    let root = Context::background();

    let (outer_ctx, outer) = session.begin(&root).await.unwrap();
    let (inner_ctx, inner) = session.begin(&outer_ctx).await.unwrap();
    assert!(!inner.is_owner());
    assert_eq!(inner_ctx.transaction_id(), outer_ctx.transaction_id());

    let (db_outer, in_tx) = session.extract(&outer_ctx);
    let (db_inner, _) = session.extract(&inner_ctx);
    assert!(in_tx);

    let pid = |db: DbHandle| async move {
        let rows = db.query("SELECT pg_backend_pid()::int4 AS pid").await?;
        Ok::<_, StoreError>(rows[0].get::<i32, _>("pid"))
    };
    assert_eq!(pid(db_outer).await.unwrap(), pid(db_inner).await.unwrap());

    session.end(inner, None).await.unwrap();
    session.end(outer, None).await.unwrap();
}

#[tokio::test]
async fn test_prepare_in_and_out_of_transaction() {
    let (session, _db) = crate::common::setup_session().await;
    let root = Context::background();
    let sql = "SELECT id, name FROM organizations WHERE id = $1";

    let (pooled, in_tx) = session.extract(&root);
    assert!(!in_tx);
    let statement = pooled.prepare(sql).await.unwrap();
    assert_eq!(statement.sql(), sql);
    assert_eq!(statement.columns().len(), 2);

    let (ctx, manager) = session.begin(&root).await.unwrap();
    let (db, in_tx) = session.extract(&ctx);
    assert!(in_tx);
    assert_eq!(db.prepare(sql).await.unwrap().columns().len(), 2);
    session.end(manager, None).await.unwrap();

    // Transaction terminée : la poignée ne sert plus
    assert!(matches!(db.prepare(sql).await, Err(StoreError::TransactionFinalized)));
}

#[tokio::test]
async fn test_register_school_commits_both_rows() {
    let (session, _db) = crate::common::setup_session().await;
    let organization_repo = Arc::new(PostgresOrganizationRepository::new(session.clone()));
    let school_repo = Arc::new(PostgresSchoolRepository::new(session.clone()));

    let create_organization = Arc::new(CreateOrganizationUseCase::new(
        organization_repo.clone(),
        session.session().clone(),
    ));
    let use_case = RegisterSchoolUseCase::new(create_organization, school_repo.clone(), session.session().clone());
    let ctx = Context::background();

    let registered = use_case
        .execute(&ctx, RegisterSchoolCommand {
            organization_name: "Académie de Lyon".into(),
            school_name: "Lycée Ampère".into(),
        })
        .await
        .unwrap();

    assert!(organization_repo.find_by_id(&ctx, registered.organization.id()).await.is_ok());
    assert!(school_repo.find_by_id(&ctx, registered.school.id()).await.is_ok());

    // Deuxième enregistrement : l'organisation existe déjà, rien n'est écrit
    let err = use_case
        .execute(&ctx, RegisterSchoolCommand {
            organization_name: "Académie de Lyon".into(),
            school_name: "Lycée du Parc".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
    assert_eq!(
        school_repo.list_by_organization(&ctx, registered.organization.id()).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_unmapped_constraint_keeps_its_identifier() {
    let (session, _db) = crate::common::setup_session().await;
    let organizations = PostgresOrganizationRepository::new(session.clone());
    let ctx = Context::background();
    let organization = Organization::new("Académie de Lyon").unwrap();
    organizations.create(&ctx, &organization).await.unwrap();

    let (db, _) = session.extract(&ctx);
    let err = db
        .execute(
            sqlx::query(
                "INSERT INTO persons (id, organization_id, first_name, last_name, email, role) \
                 VALUES ($1, $2, 'Jeanne', 'Martin', 'jeanne@lycee.fr', 'alien')",
            )
            .bind(uuid::Uuid::now_v7())
            .bind(organization.id().as_uuid()),
        )
        .await
        .map_domain(&*SCHOOL_CONSTRAINTS)
        .unwrap_err();

    assert!(matches!(err, DomainError::Constraint { ref constraint, .. } if constraint == "persons_role_check"));
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_query() {
    let (session, _db) = crate::common::setup_session().await;
    let ctx = Context::background();
    let (db, _) = session.extract(&ctx);

    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let result = db.query("SELECT pg_sleep(5)").await;
    assert!(matches!(result, Err(StoreError::Cancelled)));
    assert!(session.ping(&Context::background()).await.is_ok());
}
