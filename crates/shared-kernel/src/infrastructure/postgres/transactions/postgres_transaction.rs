// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction.rs

use std::any::Any;
use async_trait::async_trait;
use sqlx::{Postgres, Transaction as PostgresTx};
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};
use crate::infrastructure::postgres::mappers::SqlxErrorExt;

/// 1. La Structure (Le Conteneur)
pub struct PostgresTransaction {
    inner: PostgresTx<'static, Postgres>,
}

impl PostgresTransaction {
    pub fn new(tx: PostgresTx<'static, Postgres>) -> Self {
        Self { inner: tx }
    }

    pub fn get_mut(&mut self) -> &mut PostgresTx<'static, Postgres> {
        &mut self.inner
    }
}

#[async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.inner.commit().await.map_domain_infra("Failed to commit transaction")
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        self.inner.rollback().await.map_domain_infra("Failed to rollback transaction")
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// 2. Le Helper (L'outil de conversion)
pub trait TransactionExt {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>>;
}

impl TransactionExt for dyn Transaction {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>> {
        self.as_any_mut()
            .downcast_mut::<PostgresTransaction>()
            .map(|tx| tx.get_mut())
            .ok_or_else(|| DomainError::Internal("Type mismatch: Expected PostgresTransaction".into()))
    }
}
