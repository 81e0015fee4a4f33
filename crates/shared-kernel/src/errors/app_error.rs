// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Aucune ligne trouvée (404)
            DomainError::NotFound => Self::new(ErrorCode::NotFound, "Entity not found"),

            // 2. Conflit d'unicité (409) - ex: nom d'école déjà pris
            DomainError::AlreadyExists { entity, field } => Self {
                code: ErrorCode::AlreadyExists,
                message: format!("{entity} with the same {field} already exists"),
                details: Some(serde_json::json!({ "entity": entity, "field": field })),
            },

            // 3. Référence cassée (422) - ex: école rattachée à une organisation inconnue
            DomainError::ReferenceNotFound { entity } => Self {
                code: ErrorCode::ReferenceNotFound,
                message: format!("Referenced {entity} not found"),
                details: Some(serde_json::json!({ "entity": entity })),
            },

            // 4. Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            DomainError::Cancelled => Self::new(ErrorCode::Cancelled, "Operation cancelled"),

            DomainError::ConnectionFatal { .. } => Self::new(
                ErrorCode::ServiceUnavailable,
                "The database is unavailable. Please try again later.",
            ),

            // 5. Contrainte non mappée : on logge le nom réel, on masque le détail au client
            DomainError::Constraint { constraint, message } => {
                tracing::error!(%constraint, %message, "Unmapped constraint violation reached the API boundary");
                Self::new(ErrorCode::ConstraintViolation, "A data constraint was violated")
            }

            // 6. Panne technique de la base : détail logué, jamais exposé
            DomainError::Infrastructure(reason) => {
                tracing::error!(%reason, "Database infrastructure error");
                Self::new(ErrorCode::InfrastructureFailure, "A database error occurred")
            }

            // 7. Erreurs internes (500)
            DomainError::Internal(_)
            | DomainError::CommitFailed(_)
            | DomainError::RollbackFailed { .. }
            | DomainError::TransactionFinalized => Self::new(
                ErrorCode::InternalError,
                "An unexpected error occurred. Please try again later.",
            ),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
