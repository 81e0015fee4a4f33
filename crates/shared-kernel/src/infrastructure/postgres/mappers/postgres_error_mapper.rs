// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::constraints::{ConstraintTable, ViolationKind, normalize_violation};
use crate::errors::DomainError;
use crate::infrastructure::postgres::executor::StoreError;

/// Traduction unique, à la frontière du repository, d'une erreur sqlx en erreur du domaine.
pub fn normalize_sqlx_error(err: sqlx::Error, table: &dyn ConstraintTable) -> DomainError {
    match err {
        // 1. Aucune ligne : une seule sentinelle, quelle que soit la requête
        sqlx::Error::RowNotFound => DomainError::NotFound,
        sqlx::Error::Database(db_err) => {
            // 2. Violation de contrainte (classe 23) : lookup par nom de contrainte
            let kind = db_err.code().as_deref().and_then(ViolationKind::from_sqlstate);
            match kind {
                Some(kind) => normalize_violation(kind, db_err.constraint(), db_err.message(), table),
                None => DomainError::Infrastructure(db_err.message().into()),
            }
        }
        // 3. Le reste passe tel quel (opaque)
        other => DomainError::Infrastructure(other.to_string()),
    }
}

pub fn normalize_store_error(err: StoreError, table: &dyn ConstraintTable) -> DomainError {
    match err {
        StoreError::Sqlx(e) => normalize_sqlx_error(e, table),
        StoreError::Cancelled => DomainError::Cancelled,
        StoreError::TransactionFinalized => DomainError::TransactionFinalized,
        StoreError::TransactionMismatch => {
            DomainError::Internal("Transaction type mismatch: expected PostgresTransaction".into())
        }
    }
}

pub trait SqlxErrorExt<T> {
    fn map_domain(self, table: &dyn ConstraintTable) -> Result<T, DomainError>;
    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain(self, table: &dyn ConstraintTable) -> Result<T, DomainError> {
        self.map_err(|e| normalize_sqlx_error(e, table))
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }
}

pub trait StoreErrorExt<T> {
    fn map_domain(self, table: &dyn ConstraintTable) -> Result<T, DomainError>;
}

impl<T> StoreErrorExt<T> for std::result::Result<T, StoreError> {
    fn map_domain(self, table: &dyn ConstraintTable) -> Result<T, DomainError> {
        self.map_err(|e| normalize_store_error(e, table))
    }
}
