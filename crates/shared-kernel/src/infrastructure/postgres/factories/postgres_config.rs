// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_config.rs

use std::time::Duration;
use crate::infrastructure::retry::RetryConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostgresConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub retry: RetryConfig,
}

impl PostgresConfig {
    pub fn new(
        max_connections: u32,
        min_connections: u32,
        connect_timeout: Duration,
        retry: RetryConfig,
    ) -> Self {
        Self {
            max_connections,
            min_connections,
            connect_timeout,
            retry,
        }
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self::new(10, 2, Duration::from_secs(3), RetryConfig::default())
    }
}
