// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod executor;
pub mod factories;
pub mod mappers;
pub mod session;
pub mod transactions;
pub mod utils;
