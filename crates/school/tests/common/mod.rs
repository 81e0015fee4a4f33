// crates/school/tests/common/mod.rs

use std::sync::Arc;
use shared_kernel::infrastructure::postgres::session::PostgresSession;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

pub async fn setup_postgres_test_db() -> PostgresTestContext {
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
        .expect("Failed to start Postgres test container")
}

pub async fn setup_session() -> (Arc<PostgresSession>, PostgresTestContext) {
    let db = setup_postgres_test_db().await;
    (Arc::new(db.session()), db)
}
