use std::sync::Arc;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use todo_server::types::{ErrorBody, Health, Message, TodoBody, TodoList, TodoMessage};
use todo_server::{app, router, IdGenerator, TodoStore};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// Sends `req` to `app` and returns the response, leaving `app` usable.
async fn send(app: &axum::Router, req: Request<String>) -> axum::response::Response {
    app.clone().oneshot(req).await.unwrap()
}

async fn assert_error(resp: axum::response::Response, status: StatusCode) -> ErrorBody {
    assert_eq!(resp.status(), status);
    let body: ErrorBody = body_json(resp).await;
    assert!(!body.error.is_empty());
    body
}

// --- health ---

#[tokio::test]
async fn health_returns_ok_true() {
    let resp = send(&app(), empty_request("GET", "/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let health: Health = body_json(resp).await;
    assert!(health.ok);
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = send(&app(), empty_request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert!(list.todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_200_with_message() {
    let resp = send(&app(), json_request("POST", "/todos", r#"{"text":"learn testing"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: TodoMessage = body_json(resp).await;
    assert_eq!(created.message, "Todo added!");
    assert_eq!(created.todo.text, "learn testing");
}

#[tokio::test]
async fn create_todo_stores_trimmed_text() {
    let app = app();
    let resp = send(&app, json_request("POST", "/todos", r#"{"text":"  padded  "}"#)).await;
    let created: TodoMessage = body_json(resp).await;
    assert_eq!(created.todo.text, "padded");

    let resp = send(&app, empty_request("GET", &format!("/todos/{}", created.todo.id))).await;
    let fetched: TodoBody = body_json(resp).await;
    assert_eq!(fetched.todo.text, "padded");
}

#[tokio::test]
async fn create_todo_missing_text_returns_400() {
    let resp = send(&app(), json_request("POST", "/todos", "{}")).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn create_todo_blank_text_returns_400() {
    let app = app();
    for body in [r#"{"text":""}"#, r#"{"text":"   "}"#] {
        let resp = send(&app, json_request("POST", "/todos", body)).await;
        assert_error(resp, StatusCode::BAD_REQUEST).await;
    }

    let resp = send(&app, empty_request("GET", "/todos")).await;
    let list: TodoList = body_json(resp).await;
    assert!(list.todos.is_empty());
}

#[tokio::test]
async fn create_todo_malformed_json_returns_400() {
    let resp = send(&app(), json_request("POST", "/todos", r#"{"text":"#)).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn create_todo_non_string_text_returns_400() {
    let resp = send(&app(), json_request("POST", "/todos", r#"{"text":42}"#)).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn create_todo_without_content_type_returns_400() {
    let resp = send(&app(), empty_request("POST", "/todos")).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn create_todo_with_exhausted_ids_returns_generic_500() {
    let store = Arc::new(TodoStore::with_id_generator(IdGenerator::starting_at(u64::MAX)));
    let app = router(store);

    let resp = send(&app, json_request("POST", "/todos", r#"{"text":"last"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, json_request("POST", "/todos", r#"{"text":"overflow"}"#)).await;
    let body = assert_error(resp, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(body.error, "An error occurred!");
}

// --- get ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = send(&app(), empty_request("GET", "/todos/12345")).await;
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn get_todo_bad_id_returns_400() {
    let resp = send(&app(), empty_request("GET", "/todos/not-a-number")).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn non_utf8_id_returns_json_400() {
    let app = app();
    for method in ["GET", "DELETE"] {
        let resp = send(&app, empty_request(method, "/todos/%FF")).await;
        assert_error(resp, StatusCode::BAD_REQUEST).await;
    }
    let resp = send(&app, json_request("PATCH", "/todos/%FF", r#"{"text":"x"}"#)).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn signed_id_returns_400() {
    let app = app();
    send(&app, json_request("POST", "/todos", r#"{"text":"first"}"#)).await;

    let resp = send(&app, empty_request("GET", "/todos/+1")).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;

    let resp = send(&app, empty_request("GET", "/todos/1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// --- update ---

#[tokio::test]
async fn update_todo_not_found() {
    let resp = send(&app(), json_request("PATCH", "/todos/12345", r#"{"text":"Nope"}"#)).await;
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn update_todo_blank_text_returns_400_and_keeps_text() {
    let app = app();
    let resp = send(&app, json_request("POST", "/todos", r#"{"text":"original"}"#)).await;
    let created: TodoMessage = body_json(resp).await;
    let uri = format!("/todos/{}", created.todo.id);

    for body in ["{}", r#"{"text":"   "}"#] {
        let resp = send(&app, json_request("PATCH", &uri, body)).await;
        assert_error(resp, StatusCode::BAD_REQUEST).await;
    }

    let resp = send(&app, empty_request("GET", &uri)).await;
    let fetched: TodoBody = body_json(resp).await;
    assert_eq!(fetched.todo.text, "original");
}

#[tokio::test]
async fn update_todo_bad_id_returns_400() {
    let resp = send(&app(), json_request("PATCH", "/todos/abc", r#"{"text":"x"}"#)).await;
    assert_error(resp, StatusCode::BAD_REQUEST).await;
}

// --- delete ---

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = send(&app(), empty_request("DELETE", "/todos/12345")).await;
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn delete_todo_twice_returns_404_second_time() {
    let app = app();
    let resp = send(&app, json_request("POST", "/todos", r#"{"text":"once"}"#)).await;
    let created: TodoMessage = body_json(resp).await;
    let uri = format!("/todos/{}", created.todo.id);

    let resp = send(&app, empty_request("DELETE", &uri)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&app, empty_request("DELETE", &uri)).await;
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

// --- routing ---

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let resp = send(&app(), empty_request("GET", "/nope")).await;
    assert_error(resp, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn unsupported_method_returns_json_405() {
    let app = app();
    let resp = send(&app, json_request("PUT", "/todos/1", r#"{"text":"x"}"#)).await;
    assert_error(resp, StatusCode::METHOD_NOT_ALLOWED).await;

    let resp = send(&app, empty_request("DELETE", "/todos")).await;
    assert_error(resp, StatusCode::METHOD_NOT_ALLOWED).await;
}

#[tokio::test]
async fn apps_do_not_share_state() {
    let first = app();
    send(&first, json_request("POST", "/todos", r#"{"text":"only here"}"#)).await;

    let resp = send(&app(), empty_request("GET", "/todos")).await;
    let list: TodoList = body_json(resp).await;
    assert!(list.todos.is_empty());
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let app = app();

    // create
    let resp = send(&app, json_request("POST", "/todos", r#"{"text":"learn testing"}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: TodoMessage = body_json(resp).await;
    assert_eq!(created.todo.text, "learn testing");
    let id = created.todo.id;

    // list contains it
    let resp = send(&app, empty_request("GET", "/todos")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert!(list.todos.iter().any(|t| t.id == id));

    // get
    let resp = send(&app, empty_request("GET", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: TodoBody = body_json(resp).await;
    assert_eq!(fetched.todo, created.todo);

    // update
    let resp = send(
        &app,
        json_request("PATCH", &format!("/todos/{id}"), r#"{"text":"updated"}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: TodoMessage = body_json(resp).await;
    assert_eq!(updated.message, "Todo updated");
    assert_eq!(updated.todo.id, id);
    assert_eq!(updated.todo.text, "updated");

    // delete
    let resp = send(&app, empty_request("DELETE", &format!("/todos/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: Message = body_json(resp).await;
    assert_eq!(deleted.message, "Todo deleted!");

    // get after delete
    let resp = send(&app, empty_request("GET", &format!("/todos/{id}"))).await;
    assert_error(resp, StatusCode::NOT_FOUND).await;

    // list after delete
    let resp = send(&app, empty_request("GET", "/todos")).await;
    let list: TodoList = body_json(resp).await;
    assert!(list.todos.iter().all(|t| t.id != id));
}
