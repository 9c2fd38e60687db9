//! Database layer - connection pool and the message gateway
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One auto-committed statement per operation, no transactions
//! - Parameters are bound, never interpolated into SQL

pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool, ping, DatabaseConfig};
pub use repos::*;

#[cfg(test)]
pub(crate) mod testing {
    //! Store-backed test helpers. Each test gets its own schema so
    //! `--ignored` runs can execute in parallel.

    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use sqlx::PgPool;

    const SCHEMA: &str = include_str!("../../sql/schema.sql");

    pub(crate) async fn scratch_pool(schema: &str) -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");

        let admin = PgPool::connect(&url).await.expect("pool creation failed");
        // Schema names are fixed test identifiers, not user input.
        let reset = format!("DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema}");
        sqlx::raw_sql(&reset)
            .execute(&admin)
            .await
            .expect("schema reset failed");
        admin.close().await;

        let options: PgConnectOptions = url.parse().expect("invalid DATABASE_URL");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(options.options([("search_path", schema)]))
            .await
            .expect("pool creation failed");

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("schema setup failed");
        pool
    }
}
