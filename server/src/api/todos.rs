//! `/todos` handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use todo_core::{Todo, TodoInput, TodoQuery};
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::api::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let Json(input) = payload?;
    let created = state.todos.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_todos(
    State(state): State<AppState>,
    query: Result<Query<TodoQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let Query(query) = query?;
    Ok(Json(state.todos.list(&query).await?))
}

pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<Todo>> {
    let Path(id) = id?;
    Ok(Json(state.todos.get(id).await?))
}

pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.todos.update(id, input).await?))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<Todo>> {
    let Path(id) = id?;
    Ok(Json(state.todos.toggle_completed(id).await?))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
