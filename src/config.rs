use std::env;

/// Connection-pool settings for the storage layer. Injected into
/// `establish_connection` so nothing in the crate reaches for a global.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://hallmatch.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout_secs: 8,
        }
    }
}

impl StorageConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Private in-memory database. The pool is pinned to a single connection
    /// because every SQLite `:memory:` connection is its own database.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout_secs: 8,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Reads configuration from the environment, loading `.env` first when
    /// present. Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let mut storage = StorageConfig::default();
        if let Ok(url) = env::var("DATABASE_URL") {
            storage.url = url;
        }
        if let Some(n) = read_u32("DB_MAX_CONNECTIONS") {
            storage.max_connections = n.max(1);
        }
        if let Some(n) = read_u32("DB_MIN_CONNECTIONS") {
            storage.min_connections = n;
        }

        Self { storage }
    }
}

fn read_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_sqlite() {
        let config = StorageConfig::default();
        assert!(config.url.starts_with("sqlite://"));
        assert!(config.max_connections >= config.min_connections);
    }

    #[test]
    fn in_memory_pins_a_single_connection() {
        let config = StorageConfig::in_memory();
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
    }
}
