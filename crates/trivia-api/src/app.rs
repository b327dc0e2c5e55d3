//! Application builder: wires router, middleware, and state into an Axum app.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use trivia_core::config::{AppConfig, StoreBackend};
use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_database::DatabasePool;
use trivia_database::migration::run_migrations;
use trivia_database::store::{MemoryQuestionStore, PgQuestionStore, QuestionStore};
use trivia_service::random;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let body_limit = server.max_body_bytes;
    let cors = build_cors_layer(&server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Open the question store selected by configuration.
///
/// The PostgreSQL backend runs pending migrations first when
/// `store.auto_migrate` is set.
pub async fn build_store(config: &AppConfig) -> AppResult<Arc<dyn QuestionStore>> {
    info!(backend = %config.store.backend, "Initializing question store");

    match config.store.backend {
        StoreBackend::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            if config.store.auto_migrate {
                run_migrations(db.pool()).await?;
            }
            Ok(Arc::new(PgQuestionStore::new(db.into_pool())))
        }
        StoreBackend::Memory => Ok(Arc::new(MemoryQuestionStore::with_default_categories())),
    }
}

/// Runs the trivia server with the given configuration until a shutdown
/// signal arrives.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting trivia server...");

    let store = build_store(&config).await?;
    let random = random::from_seed(config.quiz.seed);
    if let Some(seed) = config.quiz.seed {
        info!(seed, "Quiz selection uses a fixed seed");
    }

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = config.bind_address();
    let app = build_app(AppState::new(config, store, random));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Trivia server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let deadline = async move {
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        () = deadline => {
            warn!(grace_seconds = grace.as_secs(), "Connections still open after grace period, exiting");
        }
    }

    info!("Trivia server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
