mod constraint_table;
mod normalizer;

pub use constraint_table::{ConstraintTable, StaticConstraintTable};
pub use normalizer::{ViolationKind, normalize_violation};
