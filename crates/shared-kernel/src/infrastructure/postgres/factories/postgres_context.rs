// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::Result;
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};
use crate::infrastructure::postgres::session::PostgresSession;
use crate::infrastructure::retry::with_startup_retry;

pub struct PostgresContext {
    pool: PgPool,
    url: String,
    config: PostgresConfig,
}

impl PostgresContext {
    pub fn builder() -> Result<PostgresContextBuilder> {
        PostgresContextBuilder::new()
    }

    pub fn builder_raw() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> PostgresConfig {
        self.config
    }

    /// Session prête à être injectée dans les repositories
    pub fn session(&self) -> PostgresSession {
        PostgresSession::new(self.pool())
    }

    /// Connexion initiale sous retry borné : l'épuisement est fatal (`ConnectionFatal`).
    pub(crate) async fn restore(builder: PostgresContextBuilder) -> Result<Self> {
        let config = builder.config;
        let url = builder.url;
        let target = url.as_str();

        let pool = with_startup_retry(config.retry, "Postgres connection", move || {
            PgPoolOptions::new()
                .max_connections(config.max_connections)
                .min_connections(config.min_connections)
                .acquire_timeout(config.connect_timeout)
                .connect(target)
        })
        .await?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Postgres pool ready"
        );

        Ok(Self { pool, url, config })
    }
}
