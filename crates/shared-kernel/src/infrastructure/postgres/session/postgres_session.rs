// crates/shared-kernel/src/infrastructure/postgres/session/postgres_session.rs

use std::future::Future;
use std::sync::Arc;
use sqlx::PgPool;

use crate::domain::constraints::StaticConstraintTable;
use crate::domain::transaction::{Context, Session, TransactionManager};
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::executor::DbHandle;
use crate::infrastructure::postgres::mappers::StoreErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransactionSource;

/// Accès session injecté dans chaque repository Postgres.
#[derive(Clone)]
pub struct PostgresSession {
    pool: PgPool,
    session: Session,
}

impl PostgresSession {
    pub fn new(pool: PgPool) -> Self {
        let source = Arc::new(PostgresTransactionSource::new(pool.clone()));
        Self {
            pool,
            session: Session::new(source),
        }
    }

    /// La frontière de session, à donner aux use cases
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn begin(&self, ctx: &Context) -> Result<(Context, TransactionManager)> {
        self.session.begin(ctx).await
    }

    pub async fn end(&self, manager: TransactionManager, outcome: Option<&DomainError>) -> Result<()> {
        self.session.end(manager, outcome).await
    }

    pub async fn run_in_transaction<T, F, Fut>(&self, ctx: &Context, work: F) -> Result<T>
    where
        F: FnOnce(Context) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.session.run_in_transaction(ctx, work).await
    }

    /// La transaction portée par `ctx` si elle existe, sinon le pool.
    /// Le booléen indique si la poignée est transactionnelle.
    pub fn extract(&self, ctx: &Context) -> (DbHandle, bool) {
        match ctx.transaction() {
            Some(transaction) => (
                DbHandle::transactional(transaction.clone(), ctx.cancellation().clone()),
                true,
            ),
            None => (DbHandle::pooled(self.pool.clone(), ctx.cancellation().clone()), false),
        }
    }

    /// Health check du backend
    pub async fn ping(&self, ctx: &Context) -> Result<()> {
        let (db, _) = self.extract(ctx);
        db.ping().await.map_domain(&StaticConstraintTable::default())
    }
}
