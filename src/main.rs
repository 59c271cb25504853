//! Waypost Server — travel-blog platform backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use waypost_core::config::AppConfig;
use waypost_core::error::AppError;
use waypost_core::traits::kv::KvStore;
use waypost_entity::user::UserDirectory;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("WAYPOST_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Waypost v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = waypost_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    waypost_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Key-value store (rate-limit backing) ─────────────
    tracing::info!("Initializing key-value store (provider: {})...", config.kv.provider);
    let kv: Option<Arc<dyn KvStore>> = waypost_kv::KvManager::new(&config.kv)
        .await?
        .map(|manager| Arc::new(manager) as Arc<dyn KvStore>);
    if kv.is_none() {
        tracing::warn!("No key-value store configured; login rate limiting is disabled");
    }

    // ── Step 3: Application state ────────────────────────────────
    if config.auth.jwt_secret.is_empty() {
        tracing::warn!("No JWT secret configured; auth endpoints will answer CONFIGURATION_ERROR");
    }

    let users: Arc<dyn UserDirectory> = Arc::new(
        waypost_database::repositories::user::UserRepository::new(db.pool().clone()),
    );

    let state = waypost_api::AppState::new(Arc::new(config.clone()), users, kv);

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app = waypost_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Waypost server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Waypost server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
