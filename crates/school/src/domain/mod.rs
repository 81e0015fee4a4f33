// crates/school/src/domain/mod.rs

pub mod constraints;
pub mod entities;
pub mod repositories;
pub mod value_objects;
