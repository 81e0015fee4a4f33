// crates/shared-kernel/src/domain/transaction/context.rs

use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, TryLockError};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::transaction::Transaction;

/// Cycle de vie d'une transaction physique : `Open -> Committed | RolledBack`.
/// Les deux états finaux sont terminaux.
pub(crate) enum TransactionState {
    Open(Box<dyn Transaction>),
    Committed,
    RolledBack,
}

impl TransactionState {
    pub(crate) fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub(crate) fn open_mut(&mut self) -> Option<&mut (dyn Transaction + 'static)> {
        match self {
            Self::Open(tx) => Some(tx.as_mut()),
            _ => None,
        }
    }

    /// Passe dans l'état final demandé et rend la transaction si elle était encore ouverte.
    pub(crate) fn finish(&mut self, committed: bool) -> Option<Box<dyn Transaction>> {
        if !self.is_open() {
            return None;
        }
        let terminal = if committed { Self::Committed } else { Self::RolledBack };
        match std::mem::replace(self, terminal) {
            Self::Open(tx) => Some(tx),
            _ => None,
        }
    }
}

/// La transaction partagée par une chaîne d'appels.
/// Un seul flux d'opérations à la fois : le mutex sérialise, il ne parallélise pas.
#[derive(Clone)]
pub struct ActiveTransaction {
    id: Uuid,
    state: Arc<Mutex<TransactionState>>,
}

impl ActiveTransaction {
    pub(crate) fn new(tx: Box<dyn Transaction>) -> Self {
        Self {
            id: Uuid::now_v7(),
            state: Arc::new(Mutex::new(TransactionState::Open(tx))),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn is_open(&self) -> bool {
        self.state.lock().await.is_open()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, TransactionState> {
        self.state.lock().await
    }

    pub(crate) fn try_lock(&self) -> std::result::Result<MutexGuard<'_, TransactionState>, TryLockError> {
        self.state.try_lock()
    }
}

/// Jeton de session explicite, passé de use case en repository.
///
/// Porte l'annulation de la chaîne d'appels et, au plus, une transaction active.
/// Le champ transaction est privé : seul `Session::begin` peut le remplir, et il le fait
/// sur une copie dérivée, jamais sur le contexte de l'appelant.
#[derive(Clone, Default)]
pub struct Context {
    cancellation: CancellationToken,
    transaction: Option<ActiveTransaction>,
}

impl Context {
    pub fn background() -> Self {
        Self::default()
    }

    /// Contexte enfant : annulé avec le parent, annulable seul, même transaction.
    pub fn child(&self) -> Self {
        Self {
            cancellation: self.cancellation.child_token(),
            transaction: self.transaction.clone(),
        }
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn in_transaction(&self) -> bool {
        self.transaction.is_some()
    }

    pub fn transaction_id(&self) -> Option<Uuid> {
        self.transaction.as_ref().map(ActiveTransaction::id)
    }

    pub fn transaction(&self) -> Option<&ActiveTransaction> {
        self.transaction.as_ref()
    }

    pub(crate) fn with_transaction(&self, transaction: ActiveTransaction) -> Self {
        Self {
            cancellation: self.cancellation.clone(),
            transaction: Some(transaction),
        }
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("cancelled", &self.is_cancelled())
            .field("transaction_id", &self.transaction_id())
            .finish()
    }
}
