//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod health;
mod settings;

use std::sync::Arc;

use anyhow::Context;
use auth::{AuthConfig, PgAuthRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use character::{PgCharacterRepository, character_router};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::health::health_router;
use crate::settings::Settings;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env().context("Failed to load settings")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if settings.debug {
        tracing::warn!("Debug mode: test token issuance is enabled");
    }

    // Database connection
    let connect_options = PgConnectOptions::new()
        .host(&settings.db.host)
        .port(settings.db.port)
        .username(&settings.db.user)
        .password(&settings.db.password)
        .database(&settings.db.name);

    let pool = PgPoolOptions::new()
        .max_connections(settings.db.max_connections)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        host = %settings.db.host,
        database = %settings.db.name,
        "Connected to database"
    );

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = Arc::new(AuthConfig::new(
        settings.jwt_key.as_bytes(),
        settings.debug,
        settings.token_expire_hours,
    ));

    // CORS configuration
    let allowed_origins: Vec<http::HeaderValue> = settings
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    // Build router
    let app = Router::new()
        .nest(
            "/token",
            auth_router(PgAuthRepository::new(pool.clone()), auth_config.clone()),
        )
        .merge(character_router(
            PgAuthRepository::new(pool.clone()),
            PgCharacterRepository::new(pool.clone()),
            auth_config,
        ))
        .merge(health_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    tracing::info!("Listening on {}", settings.listen_addr);

    let listener = TcpListener::bind(settings.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Database pool closed");

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
