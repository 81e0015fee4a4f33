// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use std::path::Path;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::session::PostgresSession;
use crate::infrastructure::postgres::utils::{PostgresTestContextBuilder, run_postgres_migrations};

/// Postgres jetable (testcontainers) avec migrations appliquées.
/// Le conteneur vit aussi longtemps que le contexte.
pub struct PostgresTestContext {
    context: PostgresContext,
    _container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub async fn restore(builder: PostgresTestContextBuilder) -> anyhow::Result<Self> {
        // 1. Démarrage container
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_tag(&builder.image_tag)
            .start()
            .await?;

        let host_port = container.get_host_port_ipv4(5432).await?;
        let conn_str = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        // 2. Pool (avec retry de démarrage)
        let mut context_builder = PostgresContext::builder_raw().with_url(&conn_str);
        if let Some(config) = builder.config {
            context_builder = context_builder.with_config(config);
        }
        let context = context_builder.build().await?;

        // 3. Migrations du module
        for path in &builder.migrations {
            if !Path::new(path).exists() {
                anyhow::bail!("Migration path not found: {}", path);
            }
            run_postgres_migrations(&context.pool(), path).await?;
        }

        Ok(Self { context, _container: container })
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }

    pub fn session(&self) -> PostgresSession {
        self.context.session()
    }
}
