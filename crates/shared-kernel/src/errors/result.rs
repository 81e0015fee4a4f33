// crates/shared-kernel/src/errors/result.rs

use crate::errors::DomainError;

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : Repositories, Session, Use Cases.
/// Les erreurs techniques y sont déjà traduites en erreurs métier.
pub type Result<T> = std::result::Result<T, DomainError>;
