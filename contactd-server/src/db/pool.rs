//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connection settings
//! arrive as discrete fields and are assembled into `PgConnectOptions`,
//! never formatted into a connection string.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Connection, PgPool};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a pooled connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// PostgreSQL connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub dbname: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            dbname: "contact_form".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

// Hand-written so the password never ends up in logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("dbname", &self.dbname)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Build sqlx connect options. TLS is disabled, matching a local store.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.dbname)
            .ssl_mode(PgSslMode::Disable);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Create a PostgreSQL connection pool.
///
/// Opens the first connection eagerly, so an unreachable store fails here.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    config
        .pool_options()
        .connect_with(config.connect_options())
        .await
}

/// Create a pool that connects on first use.
///
/// Used by tests that exercise the router without a running store.
pub fn create_lazy_pool(config: &DatabaseConfig) -> PgPool {
    config.pool_options().connect_lazy_with(config.connect_options())
}

/// Verify the store is reachable by pinging a pooled connection.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            acquire_timeout: Duration::from_millis(300),
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.dbname, "contact_form");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn debug_redacts_password() {
        let config = DatabaseConfig {
            password: Some("welcome".to_string()),
            ..DatabaseConfig::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("welcome"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn connect_options_carry_settings() {
        let config = DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            dbname: "forms".to_string(),
            ..DatabaseConfig::default()
        };
        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("forms"));
    }

    #[tokio::test]
    async fn ping_fails_when_store_unreachable() {
        let pool = create_lazy_pool(&unreachable_config());
        assert!(ping(&pool).await.is_err());
    }

    #[tokio::test]
    async fn create_pool_fails_fast_when_store_unreachable() {
        assert!(create_pool(&unreachable_config()).await.is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p contactd-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_succeeds_against_live_store() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        ping(&pool).await.expect("ping failed");
    }
}
