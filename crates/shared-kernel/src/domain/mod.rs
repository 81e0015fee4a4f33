// crates/shared-kernel/src/domain/mod.rs

pub mod constraints;
pub mod entities;
mod identifier;
pub mod transaction;
pub mod value_objects;

pub use identifier::Identifier;
