// crates/shared-kernel/src/domain/transaction/session.rs

use std::future::Future;
use std::sync::Arc;

use crate::domain::transaction::{ActiveTransaction, Context, TransactionManager, TransactionSource};
use crate::errors::{DomainError, Result};

/// Frontière de session des use cases : `begin` ouvre ou réutilise, `end` finalise.
#[derive(Clone)]
pub struct Session {
    source: Arc<dyn TransactionSource>,
}

impl Session {
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self { source }
    }

    /// Ouvre une transaction, ou réutilise celle déjà portée par `ctx`.
    ///
    /// - Transaction présente : renvoie le même contexte et un manager `Borrowed`.
    /// - Absente : ouvre une transaction (jamais de retry) et renvoie un contexte dérivé
    ///   qui la porte, avec un manager `Owning`. Le contexte de l'appelant n'est pas modifié.
    pub async fn begin(&self, ctx: &Context) -> Result<(Context, TransactionManager)> {
        if let Some(active) = ctx.transaction() {
            if !active.is_open().await {
                return Err(DomainError::TransactionFinalized);
            }
            tracing::debug!(transaction_id = %active.id(), "Reusing transaction from context");
            return Ok((ctx.clone(), TransactionManager::Borrowed));
        }

        if ctx.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        let tx = tokio::select! {
            biased;
            _ = ctx.cancellation().cancelled() => return Err(DomainError::Cancelled),
            tx = self.source.begin() => tx?,
        };

        let active = ActiveTransaction::new(tx);
        tracing::debug!(transaction_id = %active.id(), "Transaction opened");

        Ok((ctx.with_transaction(active.clone()), TransactionManager::owning(active)))
    }

    /// Finalise selon l'issue du travail encadré.
    ///
    /// Ne renvoie que les échecs de finalisation : après un rollback réussi, l'erreur métier
    /// n'est PAS renvoyée, l'appelant la propage lui-même (voir `run_in_transaction`).
    /// Si le rollback échoue, l'erreur renvoyée contient l'erreur métier et celle du rollback.
    pub async fn end(&self, manager: TransactionManager, outcome: Option<&DomainError>) -> Result<()> {
        end(manager, outcome).await
    }

    /// `begin` + travail + `end`, en renvoyant l'erreur métier si le travail a échoué.
    pub async fn run_in_transaction<T, F, Fut>(&self, ctx: &Context, work: F) -> Result<T>
    where
        F: FnOnce(Context) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let (tx_ctx, manager) = self.begin(ctx).await?;
        let outcome = work(tx_ctx).await;
        end(manager, outcome.as_ref().err()).await?;
        outcome
    }
}

pub async fn end(manager: TransactionManager, outcome: Option<&DomainError>) -> Result<()> {
    let transaction_id = manager.transaction_id();

    match outcome {
        Some(business) => {
            if let Err(rollback) = manager.rollback().await {
                tracing::error!(?transaction_id, %business, %rollback, "Rollback failed");
                return Err(DomainError::RollbackFailed {
                    business: Box::new(business.clone()),
                    rollback: Box::new(rollback),
                });
            }
            if transaction_id.is_some() {
                tracing::debug!(?transaction_id, %business, "Transaction rolled back");
            }
            Ok(())
        }
        None => {
            manager.commit().await.map_err(|e| match e {
                DomainError::TransactionFinalized => e,
                other => DomainError::CommitFailed(other.to_string()),
            })?;
            if transaction_id.is_some() {
                tracing::debug!(?transaction_id, "Transaction committed");
            }
            Ok(())
        }
    }
}
