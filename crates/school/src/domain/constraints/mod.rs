mod school_constraints;

pub use school_constraints::{SCHOOL_CONSTRAINTS, school_constraint_entries};
