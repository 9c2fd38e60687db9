//! contactd-server: contact form backend
//!
//! Accepts contact form submissions over HTTP, stores them in PostgreSQL
//! and lists them back, newest first.
//!
//! - [`db`]: connection pool and the message gateway
//! - [`http`]: axum router, CORS policy and the serve loop
//! - [`models`]: request bodies and validation errors

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, ping, DatabaseConfig};
pub use http::{run_server, ServerConfig, ServerError};
