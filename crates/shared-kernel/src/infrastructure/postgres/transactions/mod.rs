mod postgres_transaction;
mod postgres_transaction_source;

pub use postgres_transaction::{PostgresTransaction, TransactionExt};
pub use postgres_transaction_source::PostgresTransactionSource;
