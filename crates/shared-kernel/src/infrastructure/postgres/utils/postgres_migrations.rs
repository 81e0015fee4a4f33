// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use std::path::Path;
use sqlx::migrate::Migrator;

/// Applique les migrations d'un répertoire (format sqlx) sur le pool.
pub async fn run_postgres_migrations(pool: &sqlx::PgPool, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let migrator = Migrator::new(path).await?;
    migrator.run(pool).await?;
    tracing::info!(path = %path.display(), count = migrator.iter().count(), "Postgres migrations applied");
    Ok(())
}
