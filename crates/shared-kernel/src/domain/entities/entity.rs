// crates/shared-kernel/src/domain/entities/entity.rs
use chrono::{DateTime, Utc};
use crate::domain::Identifier;
use crate::errors::DomainError;

pub trait EntityMetadata {
    fn entity_name() -> &'static str;

    /// Sentinelle d'unicité pour cette entité (ex: School + "name")
    fn already_exists(field: &'static str) -> DomainError {
        DomainError::AlreadyExists {
            entity: Self::entity_name(),
            field,
        }
    }

    /// Sentinelle de clé étrangère : cette entité est référencée mais absente
    fn reference_not_found() -> DomainError {
        DomainError::ReferenceNotFound {
            entity: Self::entity_name(),
        }
    }
}

pub trait Entity: EntityMetadata {
    type Id: Identifier;

    fn id(&self) -> &Self::Id;
    fn created_at(&self) -> DateTime<Utc>;
}
