#![allow(dead_code)]

use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use todo_core::{ListWithTodos, Todo};
use todo_server::{app, DatabaseConnection};
use tower::ServiceExt;

pub async fn test_app() -> Router {
    app(DatabaseConnection::in_memory().await.unwrap())
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn status_of(app: &Router, request: Request<String>) -> StatusCode {
    send(app, request).await.status()
}

pub async fn create_list(app: &Router, title: &str, description: &str) -> ListWithTodos {
    let body = json!({ "title": title, "description": description }).to_string();
    let resp = send(app, json_request("POST", "/lists/", &body)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

pub async fn create_todo(app: &Router, body: Value) -> Todo {
    let resp = send(app, json_request("POST", "/todos/", &body.to_string())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

pub async fn get_todos(app: &Router, query: &str) -> Vec<Todo> {
    let resp = send(app, empty_request("GET", &format!("/todos/{query}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

pub fn titles(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.title.as_str()).collect()
}
