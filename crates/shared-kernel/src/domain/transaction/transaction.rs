// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;
use async_trait::async_trait;
use crate::errors::Result;

/// Une transaction physique ouverte, quel que soit le moteur.
/// `commit` et `rollback` consomment la transaction : une fois finalisée, elle n'existe plus.
#[async_trait]
pub trait Transaction: Send + Any {
    async fn commit(self: Box<Self>) -> Result<()>;

    async fn rollback(self: Box<Self>) -> Result<()>;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
