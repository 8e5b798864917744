use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use log::{debug, info};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

use crate::config::DataSourceSettings;
use crate::error::{DaoError, DaoResult};

/// Hands out one connection per call. The connection goes back to its pool
/// when the returned guard is dropped.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn acquire(&self) -> DaoResult<PoolConnection<Sqlite>>;
}

#[async_trait]
impl ConnectionProvider for SqlitePool {
    async fn acquire(&self) -> DaoResult<PoolConnection<Sqlite>> {
        Ok(SqlitePool::acquire(self).await?)
    }
}

/// A pool registered under a logical name.
#[derive(Debug, Clone)]
pub struct NamedDataSource {
    name: String,
    pool: SqlitePool,
}

impl NamedDataSource {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionProvider for NamedDataSource {
    async fn acquire(&self) -> DaoResult<PoolConnection<Sqlite>> {
        debug!("acquiring connection from datasource '{}'", self.name);
        Ok(self.pool.acquire().await?)
    }
}

#[derive(Debug, Default)]
pub struct DataSourceRegistry {
    sources: HashMap<String, SqlitePool>,
}

impl DataSourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `pool` under `name`, replacing any pool already there.
    pub fn register(&mut self, name: impl Into<String>, pool: SqlitePool) {
        self.sources.insert(name.into(), pool);
    }

    pub fn lookup(&self, name: &str) -> DaoResult<NamedDataSource> {
        self.sources
            .get(name)
            .map(|pool| NamedDataSource {
                name: name.to_string(),
                pool: pool.clone(),
            })
            .ok_or_else(|| DaoError::DataSourceNotFound(name.to_string()))
    }

    /// Opens a pool for `settings` and registers it under the configured name.
    pub async fn connect(&mut self, settings: &DataSourceSettings) -> DaoResult<NamedDataSource> {
        let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(options)
            .await?;
        info!(
            "datasource '{}' connected to {} (max {} connections)",
            settings.name, settings.url, settings.max_connections
        );
        self.register(settings.name.clone(), pool);
        self.lookup(&settings.name)
    }
}
