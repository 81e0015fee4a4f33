// crates/shared-kernel/src/domain/constraints/constraint_table.rs

use std::collections::HashMap;
use crate::errors::{DomainError, Result};

/// Table de correspondance identifiant de contrainte -> sentinelle du domaine.
/// Chaque moteur de stockage fournit la sienne sans toucher aux repositories.
pub trait ConstraintTable: Send + Sync {
    fn lookup(&self, constraint: &str) -> Option<DomainError>;
}

/// Table figée, construite une fois à l'initialisation.
#[derive(Debug, Clone, Default)]
pub struct StaticConstraintTable {
    entries: HashMap<&'static str, DomainError>,
}

impl StaticConstraintTable {
    /// Refuse un identifiant présent deux fois : une contrainte = une seule sentinelle.
    pub fn try_new(entries: impl IntoIterator<Item = (&'static str, DomainError)>) -> Result<Self> {
        let mut map = HashMap::new();
        for (constraint, sentinel) in entries {
            if map.insert(constraint, sentinel).is_some() {
                return Err(DomainError::Internal(format!(
                    "Constraint '{constraint}' is mapped more than once"
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Variante infaillible pour les tables statiques : en cas de doublon,
    /// la première entrée gagne et le doublon est loggé.
    pub fn new(entries: impl IntoIterator<Item = (&'static str, DomainError)>) -> Self {
        let mut map = HashMap::new();
        for (constraint, sentinel) in entries {
            if map.contains_key(constraint) {
                tracing::error!(constraint, "Duplicate constraint mapping ignored");
                continue;
            }
            map.insert(constraint, sentinel);
        }
        Self { entries: map }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConstraintTable for StaticConstraintTable {
    fn lookup(&self, constraint: &str) -> Option<DomainError> {
        self.entries.get(constraint).cloned()
    }
}
