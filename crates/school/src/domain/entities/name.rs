// crates/school/src/domain/entities/name.rs

use shared_kernel::errors::{DomainError, Result};

pub(crate) const NAME_MAX_LEN: usize = 200;

/// Trim + bornes de longueur, commun à tous les libellés
pub(crate) fn validated_name(field: &'static str, raw: impl Into<String>) -> Result<String> {
    let name = raw.into().trim().to_string();
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_LEN {
        return Err(DomainError::Validation {
            field,
            reason: format!("Must be between 1 and {} chars", NAME_MAX_LEN),
        });
    }
    Ok(name)
}
