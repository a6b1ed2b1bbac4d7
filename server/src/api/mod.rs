//! HTTP surface: routes, handlers and error rendering.

pub mod error;
mod lists;
mod todos;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::db::DatabaseConnection;
use crate::service::{ListManager, TodoManager};

pub use error::{ApiError, ApiErrorResponse, ApiResult};

/// Shared handler state. Cloned per request; holds only handles to the store.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub lists: ListManager,
    pub todos: TodoManager,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            lists: ListManager::new(db.clone()),
            todos: TodoManager::new(db.clone()),
            db,
        }
    }
}

/// Build the router. Collection routes answer with and without a trailing
/// slash.
pub fn router(db: DatabaseConnection) -> Router {
    let lists = get(lists::list_lists).post(lists::create_list);
    let todos = get(todos::list_todos).post(todos::create_todo);

    Router::new()
        .route("/health", get(health))
        .route("/lists", lists.clone())
        .route("/lists/", lists)
        .route(
            "/lists/{id}",
            get(lists::get_list)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route("/lists/{id}/todos", get(lists::list_todos_of_list))
        .route("/todos", todos.clone())
        .route("/todos/", todos)
        .route(
            "/todos/{id}",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/todos/{id}/toggle", patch(todos::toggle_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(db))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
