//! HTTP server command
//!
//! Connects to PostgreSQL, verifies the store answers, then serves the
//! contact form API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser};

use contactd_server::db::{create_pool, ping, DatabaseConfig};
use contactd_server::http::{cors_layer, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen_addr: SocketAddr,

    /// Origins allowed to make cross-origin requests (comma separated)
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5500", "http://127.0.0.1:5500"]
    )]
    pub allowed_origins: Vec<String>,

    #[command(flatten)]
    pub db: DbArgs,
}

/// PostgreSQL connection settings
#[derive(Args)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = "contact_form")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub db_acquire_timeout: u64,
}

impl From<DbArgs> for DatabaseConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            host: args.db_host,
            port: args.db_port,
            user: args.db_user,
            password: args.db_password,
            dbname: args.db_name,
            max_connections: args.db_max_connections,
            acquire_timeout: Duration::from_secs(args.db_acquire_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Reject a bad allow-list before touching the database
    cors_layer(&args.allowed_origins).context("Invalid ALLOWED_ORIGINS")?;

    let db_config = DatabaseConfig::from(args.db);
    tracing::info!(
        host = %db_config.host,
        port = db_config.port,
        dbname = %db_config.dbname,
        "Connecting to database"
    );

    let pool = create_pool(&db_config)
        .await
        .context("Error connecting to DB")?;
    ping(&pool).await.context("Error connecting to DB")?;

    let config = ServerConfig {
        listen_addr: args.listen_addr,
        allowed_origins: args.allowed_origins,
    };

    // Run server (blocks until shutdown), then release the pool
    let result = run_server(pool.clone(), config)
        .await
        .context("Server error");
    pool.close().await;
    tracing::debug!("Database pool closed");

    result
}
