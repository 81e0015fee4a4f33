// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String
    },

    /// Aucune ligne ne correspond, quelle que soit la requête d'origine
    #[error("Entity not found")]
    NotFound,

    /// Violation d'unicité connue (ex: nom d'école déjà pris)
    #[error("{entity} already exists with the same {field}")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
    },

    /// Violation de clé étrangère connue : l'entité référencée n'existe pas
    #[error("Referenced {entity} not found")]
    ReferenceNotFound {
        entity: &'static str,
    },

    /// Contrainte absente de la table de correspondance, remontée telle quelle
    #[error("Unmapped constraint violation '{constraint}': {message}")]
    Constraint {
        constraint: String,
        message: String,
    },

    #[error("Transaction commit failed: {0}")]
    CommitFailed(String),

    /// Le rollback a échoué : on garde l'erreur métier ET l'erreur de rollback
    #[error("Transaction rollback failed: {rollback} (rolling back after: {business})")]
    RollbackFailed {
        business: Box<DomainError>,
        rollback: Box<DomainError>,
    },

    #[error("Transaction already finalized")]
    TransactionFinalized,

    /// Budget de tentatives de connexion épuisé au démarrage
    #[error("Connection failed after exhausting {attempts} attempts: {reason}")]
    ConnectionFatal {
        attempts: u32,
        reason: String,
    },

    #[error("Operation cancelled")]
    Cancelled,

    /// Erreur liée à l'infrastructure (DB, pool, driver)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    pub fn is_reference_not_found(&self) -> bool {
        matches!(self, Self::ReferenceNotFound { .. })
    }

    /// Échec de la finalisation (commit/rollback), distinct de l'échec métier
    pub fn is_finalize_error(&self) -> bool {
        matches!(
            self,
            Self::CommitFailed(_) | Self::RollbackFailed { .. } | Self::TransactionFinalized
        )
    }
}
