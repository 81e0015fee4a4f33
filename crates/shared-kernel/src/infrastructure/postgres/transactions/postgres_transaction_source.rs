// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_source.rs

use async_trait::async_trait;
use sqlx::PgPool;
use crate::domain::transaction::{Transaction, TransactionSource};
use crate::errors::Result;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransaction;

pub struct PostgresTransactionSource {
    pool: PgPool,
}

impl PostgresTransactionSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionSource for PostgresTransactionSource {
    async fn begin(&self) -> Result<Box<dyn Transaction>> {
        let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;
        Ok(Box::new(PostgresTransaction::new(tx)))
    }
}
