//! HTTP service for todo lists and their todos.
//!
//! # Overview
//! An axum router over a SQLite store. Handlers delegate to `ListManager` and
//! `TodoManager`, which validate payloads, run each write in its own
//! transaction and hand loaded entities to the query engine in `todo_core`.
//!
//! # Design
//! - No in-process state besides the connection pool handle.
//! - Operation errors are `todo_core::TodoError`; `api::ApiError` turns them
//!   into status codes at the HTTP boundary.

pub mod api;
pub mod config;
pub mod db;
pub mod service;

use axum::Router;
use tokio::net::TcpListener;

pub use api::AppState;
pub use config::ServerConfig;
pub use db::DatabaseConnection;

pub fn app(db: DatabaseConnection) -> Router {
    api::router(db)
}

/// Serve `app(db)` on `listener` until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, db: DatabaseConnection) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
