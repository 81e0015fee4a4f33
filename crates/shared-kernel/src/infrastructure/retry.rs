// crates/shared-kernel/src/infrastructure/retry.rs

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use crate::errors::{DomainError, Result};

/// Politique de retry au démarrage : nombre de tentatives fixe, délai fixe.
/// C'est la seule politique de retry intégrée : aucune requête en vol n'est rejouée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(2),
        }
    }
}

/// Exécute `action` jusqu'au succès ou jusqu'à épuisement des tentatives.
/// L'épuisement est fatal : `DomainError::ConnectionFatal` avec la dernière erreur.
pub async fn with_startup_retry<F, Fut, T, E>(config: RetryConfig, what: &'static str, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    E: Display,
{
    let attempts = config.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match action().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!("{} succeeded on attempt {}/{}", what, attempt, attempts);
                }
                return Ok(value);
            }
            Err(e) => {
                last_error = e.to_string();
                if attempt < attempts {
                    tracing::warn!(
                        "{} failed (attempt {}/{}): {}. Retrying in {:?}...",
                        what,
                        attempt,
                        attempts,
                        last_error,
                        config.delay
                    );
                    tokio::time::sleep(config.delay).await;
                }
            }
        }
    }

    tracing::error!("{} failed after {} attempts: {}", what, attempts, last_error);

    Err(DomainError::ConnectionFatal {
        attempts,
        reason: last_error,
    })
}
