// crates/shared-kernel/src/domain/constraints/normalizer.rs

use std::fmt;
use crate::domain::constraints::ConstraintTable;
use crate::errors::DomainError;

/// Classe de violation d'intégrité (SQLSTATE classe 23).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
    Exclusion,
    Other,
}

impl ViolationKind {
    /// `None` si le code n'est pas une violation de contrainte.
    pub fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            "23505" => Some(Self::Unique),
            "23503" => Some(Self::ForeignKey),
            "23502" => Some(Self::NotNull),
            "23514" => Some(Self::Check),
            "23P01" => Some(Self::Exclusion),
            c if c.starts_with("23") => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unique => "unique",
            Self::ForeignKey => "foreign_key",
            Self::NotNull => "not_null",
            Self::Check => "check",
            Self::Exclusion => "exclusion",
            Self::Other => "integrity",
        };
        f.write_str(label)
    }
}

/// Traduit une violation de contrainte en sentinelle du domaine.
///
/// Contrainte connue : sentinelle de la table. Inconnue (ou sans nom) : remontée telle quelle
/// dans `DomainError::Constraint`, avec son identifiant, plutôt qu'un mapping trompeur.
pub fn normalize_violation(
    kind: ViolationKind,
    constraint: Option<&str>,
    message: &str,
    table: &dyn ConstraintTable,
) -> DomainError {
    if let Some(sentinel) = constraint.and_then(|name| table.lookup(name)) {
        return sentinel;
    }

    let constraint = constraint.unwrap_or("unknown");
    tracing::warn!(%kind, constraint, "Unmapped constraint violation");

    DomainError::Constraint {
        constraint: constraint.to_string(),
        message: message.to_string(),
    }
}
