// crates/shared-kernel/src/domain/transaction/transaction_source.rs

use async_trait::async_trait;
use crate::domain::transaction::Transaction;
use crate::errors::Result;

/// Ouvre des transactions physiques (le pool Postgres en production).
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn Transaction>>;
}
