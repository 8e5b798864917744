use std::env;

use crate::error::{DaoError, DaoResult};

pub const DEFAULT_DATASOURCE_NAME: &str = "demo";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://dev.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceSettings {
    /// Logical name the pool is registered under.
    pub name: String,
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub datasource: DataSourceSettings,
    pub bind_addr: String,
}

impl Settings {
    /// Reads settings from the process environment, loading `.env` first if present.
    pub fn from_env() -> DaoResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> DaoResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                DaoError::Config(format!("DATABASE_MAX_CONNECTIONS '{}': {}", raw, e))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(DaoError::Config(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Settings {
            datasource: DataSourceSettings {
                name: lookup("DATASOURCE_NAME")
                    .unwrap_or_else(|| DEFAULT_DATASOURCE_NAME.to_string()),
                url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                max_connections,
            },
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> DaoResult<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.datasource.name, "demo");
        assert_eq!(s.datasource.url, "sqlite://dev.db");
        assert_eq!(s.datasource.max_connections, 5);
        assert_eq!(s.bind_addr, "127.0.0.1:3000");
    }

    #[test]
    fn overrides_from_environment() {
        let s = settings(&[
            ("DATASOURCE_NAME", "reporting"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ])
        .unwrap();
        assert_eq!(s.datasource.name, "reporting");
        assert_eq!(s.datasource.url, "sqlite::memory:");
        assert_eq!(s.datasource.max_connections, 2);
        assert_eq!(s.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn rejects_bad_pool_size() {
        assert!(matches!(
            settings(&[("DATABASE_MAX_CONNECTIONS", "many")]),
            Err(DaoError::Config(_))
        ));
        assert!(matches!(
            settings(&[("DATABASE_MAX_CONNECTIONS", "0")]),
            Err(DaoError::Config(_))
        ));
    }
}
