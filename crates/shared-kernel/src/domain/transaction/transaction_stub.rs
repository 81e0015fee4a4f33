// crates/shared-kernel/src/domain/transaction/transaction_stub.rs

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};

// --- TRANSACTION MANAGEMENT ---

/// Compteurs partagés entre la source stub et toutes ses transactions
#[derive(Debug, Default)]
pub struct TransactionLog {
    pub begun: AtomicUsize,
    pub committed: AtomicUsize,
    pub rolled_back: AtomicUsize,
    /// Erreurs forcées, consommées une seule fois
    pub commit_error: Mutex<Option<DomainError>>,
    pub rollback_error: Mutex<Option<DomainError>>,
}

impl TransactionLog {
    pub fn begun(&self) -> usize {
        self.begun.load(Ordering::SeqCst)
    }

    pub fn committed(&self) -> usize {
        self.committed.load(Ordering::SeqCst)
    }

    pub fn rolled_back(&self) -> usize {
        self.rolled_back.load(Ordering::SeqCst)
    }
}

pub struct FakeTransaction {
    log: Arc<TransactionLog>,
}

impl FakeTransaction {
    pub fn new(log: Arc<TransactionLog>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl Transaction for FakeTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        if let Some(err) = self.log.commit_error.lock().unwrap().take() {
            return Err(err);
        }
        self.log.committed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        if let Some(err) = self.log.rollback_error.lock().unwrap().take() {
            return Err(err);
        }
        self.log.rolled_back.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
