// crates/shared-kernel/src/infrastructure/postgres/executor/store_error.rs

use thiserror::Error;

/// Erreur brute de la couche d'exécution, avant normalisation par le repository.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Transaction already finalized")]
    TransactionFinalized,

    #[error("Transaction type mismatch: expected PostgresTransaction")]
    TransactionMismatch,
}
