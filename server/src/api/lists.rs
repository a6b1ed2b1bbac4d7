//! `/lists` handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use todo_core::{ListInput, ListQuery, ListWithTodos, Todo, TodoQuery};
use uuid::Uuid;

use crate::api::error::ApiResult;
use crate::api::AppState;

pub async fn create_list(
    State(state): State<AppState>,
    payload: Result<Json<ListInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ListWithTodos>)> {
    let Json(input) = payload?;
    let created = state.lists.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_lists(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ListWithTodos>>> {
    let Query(query) = query?;
    Ok(Json(state.lists.list(&query).await?))
}

pub async fn get_list(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Json<ListWithTodos>> {
    let Path(id) = id?;
    Ok(Json(state.lists.get(id).await?))
}

pub async fn update_list(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ListInput>, JsonRejection>,
) -> ApiResult<Json<ListWithTodos>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.lists.update(id, input).await?))
}

pub async fn delete_list(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.lists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Todos of one list, with the same filters as `GET /todos/`.
pub async fn list_todos_of_list(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<TodoQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let Path(id) = id?;
    let Query(query) = query?;
    Ok(Json(state.todos.list_for_list(id, &query).await?))
}
