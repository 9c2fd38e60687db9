//! Axum server setup
//!
//! Server skeleton with:
//! - CORS restricted to a configured origin allow-list
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;

/// How long browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8080)
    pub listen_addr: SocketAddr,

    /// Origins allowed to read responses cross-origin.
    ///
    /// Anything not listed gets no CORS headers and the browser blocks it.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            allowed_origins: vec![
                "http://localhost:5500".to_string(),
                "http://127.0.0.1:5500".to_string(),
            ],
        }
    }
}

/// Shared application state
pub struct AppState {
    pub pool: PgPool,
}

/// Build the CORS policy for the given origin allow-list.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, ServerError> {
    let origins = allowed_origins
        .iter()
        .map(|origin| parse_origin(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(PREFLIGHT_MAX_AGE))
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ServerError> {
    let invalid = || ServerError::InvalidOrigin {
        origin: origin.to_string(),
    };

    // A wildcard cannot be combined with credentials.
    if origin == "*" || origin.is_empty() {
        return Err(invalid());
    }

    HeaderValue::from_str(origin).map_err(|_| invalid())
}

/// Build the application router with all routes.
pub fn build_router(pool: PgPool, config: &ServerConfig) -> Result<Router, ServerError> {
    let cors = cors_layer(&config.allowed_origins)?;
    let state = AppState { pool };

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(Router::new()
        .merge(routes::messages::router())
        .layer(middleware)
        .with_state(Arc::new(state)))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// The caller owns the pool and is expected to close it afterwards.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&db_config).await?;
/// run_server(pool.clone(), ServerConfig::default()).await?;
/// pool.close().await;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(pool, &config)?;
    tracing::debug!(origins = ?config.allowed_origins, "CORS allow-list loaded");

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin '{origin}'")]
    InvalidOrigin { origin: String },
}
