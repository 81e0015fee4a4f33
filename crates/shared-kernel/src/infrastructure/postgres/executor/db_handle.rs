// crates/shared-kernel/src/infrastructure/postgres/executor/db_handle.rs

use std::future::Future;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgArguments, PgQueryResult, PgRow, PgStatement};
use sqlx::query::{Query, QueryAs};
use sqlx::{Connection, Executor, FromRow, PgConnection, PgPool, Postgres, Statement};
use tokio::sync::MutexGuard;
use tokio_util::sync::CancellationToken;

use crate::domain::transaction::{ActiveTransaction, TransactionState};
use crate::infrastructure::postgres::executor::{NamedQuery, StoreError};
use crate::infrastructure::postgres::transactions::TransactionExt;

/// Poignée d'exécution uniforme : connexion du pool ou transaction ouverte.
/// Le repository ne sait pas laquelle il tient, il ne voit que ces opérations.
#[derive(Clone)]
pub struct DbHandle {
    target: Target,
    cancellation: CancellationToken,
}

#[derive(Clone)]
enum Target {
    Pool(PgPool),
    Transaction(ActiveTransaction),
}

/// Connexion empruntée le temps d'une opération
enum Lease<'a> {
    Pooled(PoolConnection<Postgres>),
    Transaction(MutexGuard<'a, TransactionState>),
}

impl Lease<'_> {
    fn connection(&mut self) -> Result<&mut PgConnection, StoreError> {
        match self {
            Lease::Pooled(conn) => Ok(&mut **conn),
            Lease::Transaction(state) => {
                let tx = state.open_mut().ok_or(StoreError::TransactionFinalized)?;
                let sqlx_tx = tx
                    .downcast_mut_sqlx()
                    .map_err(|_| StoreError::TransactionMismatch)?;
                Ok(&mut **sqlx_tx)
            }
        }
    }
}

impl DbHandle {
    pub(crate) fn pooled(pool: PgPool, cancellation: CancellationToken) -> Self {
        Self {
            target: Target::Pool(pool),
            cancellation,
        }
    }

    pub(crate) fn transactional(transaction: ActiveTransaction, cancellation: CancellationToken) -> Self {
        Self {
            target: Target::Transaction(transaction),
            cancellation,
        }
    }

    async fn lease(&self) -> Result<Lease<'_>, StoreError> {
        match &self.target {
            Target::Pool(pool) => Ok(Lease::Pooled(pool.acquire().await?)),
            Target::Transaction(transaction) => Ok(Lease::Transaction(transaction.lock().await)),
        }
    }

    /// Annulation coopérative : si le jeton est annulé, la future en vol est abandonnée.
    async fn cancellable<T>(&self, operation: impl Future<Output = Result<T, StoreError>>) -> Result<T, StoreError> {
        if self.cancellation.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancellation.cancelled() => Err(StoreError::Cancelled),
            result = operation => result,
        }
    }

    // --- ÉCRITURES ---

    pub async fn execute<'q>(&self, query: Query<'q, Postgres, PgArguments>) -> Result<PgQueryResult, StoreError> {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            Ok(query.execute(lease.connection()?).await?)
        })
        .await
    }

    /// Écriture à paramètres nommés : `binder` lie la valeur de chaque nom, dans l'ordre des `$n`.
    pub async fn exec_named<B>(&self, named: &NamedQuery, binder: B) -> Result<PgQueryResult, StoreError>
    where
        B: for<'q> Fn(Query<'q, Postgres, PgArguments>, &str) -> Query<'q, Postgres, PgArguments>,
    {
        let mut query = sqlx::query(named.sql());
        for name in named.parameters() {
            query = binder(query, name.as_str());
        }
        self.execute(query).await
    }

    // --- LECTURES ---

    pub async fn select<'q, T>(&self, query: QueryAs<'q, Postgres, T, PgArguments>) -> Result<Vec<T>, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            Ok(query.fetch_all(lease.connection()?).await?)
        })
        .await
    }

    /// Une ligne exactement : zéro ligne donne `sqlx::Error::RowNotFound`.
    pub async fn get<'q, T>(&self, query: QueryAs<'q, Postgres, T, PgArguments>) -> Result<T, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            Ok(query.fetch_one(lease.connection()?).await?)
        })
        .await
    }

    pub async fn get_optional<'q, T>(&self, query: QueryAs<'q, Postgres, T, PgArguments>) -> Result<Option<T>, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            Ok(query.fetch_optional(lease.connection()?).await?)
        })
        .await
    }

    /// Requête brute, lignes non typées
    pub async fn query(&self, sql: &str) -> Result<Vec<PgRow>, StoreError> {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            Ok(sqlx::query(sql).fetch_all(lease.connection()?).await?)
        })
        .await
    }

    pub async fn prepare(&self, sql: &str) -> Result<PgStatement<'static>, StoreError> {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            let statement = lease.connection()?.prepare(sql).await?;
            Ok(Statement::to_owned(&statement))
        })
        .await
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.cancellable(async {
            let mut lease = self.lease().await?;
            Ok(lease.connection()?.ping().await?)
        })
        .await
    }
}
