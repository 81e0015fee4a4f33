// crates/shared-kernel/src/domain/transaction/transaction_source_stub.rs

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::domain::transaction::transaction_stub::{FakeTransaction, TransactionLog};
use crate::domain::transaction::{Transaction, TransactionSource};
use crate::errors::{DomainError, Result};

#[derive(Default)]
pub struct StubTransactionSource {
    pub log: Arc<TransactionLog>,
    /// Simulation d'erreur forcée à l'ouverture
    pub begin_error: Mutex<Option<DomainError>>,
}

impl StubTransactionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_begin(&self, err: DomainError) {
        *self.begin_error.lock().unwrap() = Some(err);
    }

    pub fn fail_next_commit(&self, err: DomainError) {
        *self.log.commit_error.lock().unwrap() = Some(err);
    }

    pub fn fail_next_rollback(&self, err: DomainError) {
        *self.log.rollback_error.lock().unwrap() = Some(err);
    }
}

#[async_trait]
impl TransactionSource for StubTransactionSource {
    async fn begin(&self) -> Result<Box<dyn Transaction>> {
        if let Some(err) = self.begin_error.lock().unwrap().take() {
            return Err(err);
        }
        self.log.begun.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeTransaction::new(self.log.clone())))
    }
}
