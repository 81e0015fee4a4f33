// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use uuid::Uuid;

use crate::domain::transaction::{ActiveTransaction, TransactionState};
use crate::errors::{DomainError, Result};

/// Poignée de finalisation rendue par `Session::begin`.
///
/// Seul le `begin` le plus externe d'une chaîne reçoit un manager `Owning`.
/// Les `begin` imbriqués reçoivent `Borrowed` : commit et rollback y réussissent toujours
/// sans toucher à la transaction physique.
pub enum TransactionManager {
    Owning(OwningManager),
    Borrowed,
}

impl TransactionManager {
    pub(crate) fn owning(transaction: ActiveTransaction) -> Self {
        Self::Owning(OwningManager { transaction })
    }

    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owning(_))
    }

    pub fn transaction_id(&self) -> Option<Uuid> {
        match self {
            Self::Owning(manager) => Some(manager.transaction.id()),
            Self::Borrowed => None,
        }
    }

    pub async fn commit(self) -> Result<()> {
        match self {
            Self::Owning(manager) => manager.finalize(true).await,
            Self::Borrowed => Ok(()),
        }
    }

    pub async fn rollback(self) -> Result<()> {
        match self {
            Self::Owning(manager) => manager.finalize(false).await,
            Self::Borrowed => Ok(()),
        }
    }
}

impl std::fmt::Debug for TransactionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Owning(manager) => f.debug_tuple("Owning").field(&manager.transaction.id()).finish(),
            Self::Borrowed => f.write_str("Borrowed"),
        }
    }
}

pub struct OwningManager {
    transaction: ActiveTransaction,
}

impl OwningManager {
    async fn finalize(&self, commit: bool) -> Result<()> {
        // Verrou tenu jusqu'à la fin : aucune opération ne voit un état intermédiaire
        let mut state = self.transaction.lock().await;
        let tx = state.finish(commit).ok_or(DomainError::TransactionFinalized)?;

        if !commit {
            return tx.rollback().await;
        }
        let result = tx.commit().await;
        if result.is_err() {
            // Commit refusé : le driver a abandonné la transaction
            *state = TransactionState::RolledBack;
        }
        result
    }
}

impl Drop for OwningManager {
    // Manager abandonné (panic, return anticipé, future annulée) :
    // on lâche la transaction encore ouverte, le driver la rollback au drop.
    fn drop(&mut self) {
        let Ok(mut state) = self.transaction.try_lock() else {
            tracing::warn!(
                transaction_id = %self.transaction.id(),
                "Transaction manager dropped while the transaction is in use, it stays open until the last context is dropped"
            );
            return;
        };
        if let Some(tx) = state.finish(false) {
            tracing::warn!(
                transaction_id = %self.transaction.id(),
                "Transaction manager dropped without end(), abandoning open transaction"
            );
            drop(tx);
        }
    }
}
