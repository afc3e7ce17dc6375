use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::ApiError;
use crate::id::TodoId;
use crate::store::TodoStore;
use crate::types::{
    ErrorBody, Health, Message, TodoBody, TodoList, TodoMessage, TODO_ADDED, TODO_DELETED,
    TODO_UPDATED,
};
use crate::validate::{parse_id, require_text, TodoPayload, ValidationError};

pub type SharedStore = Arc<TodoStore>;

/// Routes every endpoint to `store`.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(store)
}

async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

async fn list_todos(State(store): State<SharedStore>) -> Json<TodoList> {
    Json(TodoList {
        todos: store.list().await,
    })
}

async fn create_todo(
    State(store): State<SharedStore>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<TodoMessage>, ApiError> {
    let text = require_text(&body(payload)?)?;
    let todo = store.create(&text).await?;
    log::debug!("POST /todos -> {}", todo.id);
    Ok(Json(TodoMessage {
        message: TODO_ADDED.to_string(),
        todo,
    }))
}

async fn get_todo(
    State(store): State<SharedStore>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<TodoBody>, ApiError> {
    let id = path_id(id)?;
    let todo = store.get(id).await?;
    Ok(Json(TodoBody { todo }))
}

async fn update_todo(
    State(store): State<SharedStore>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> Result<Json<TodoMessage>, ApiError> {
    let id = path_id(id)?;
    let text = require_text(&body(payload)?)?;
    let todo = store.update(id, &text).await?;
    log::debug!("PATCH /todos/{id}");
    Ok(Json(TodoMessage {
        message: TODO_UPDATED.to_string(),
        todo,
    }))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Message>, ApiError> {
    let id = path_id(id)?;
    store.remove(id).await?;
    log::debug!("DELETE /todos/{id}");
    Ok(Json(Message {
        message: TODO_DELETED.to_string(),
    }))
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
}

/// Path segments that are not valid UTF-8 never reach `parse_id`; they are
/// reported as invalid ids too.
fn path_id(id: Result<Path<String>, PathRejection>) -> Result<TodoId, ValidationError> {
    let Path(raw) = id.map_err(|rejection| ValidationError::InvalidId(rejection.body_text()))?;
    parse_id(&raw)
}

/// Folds axum's JSON rejections (bad syntax, wrong content type, wrong field
/// types) into a validation failure.
fn body(payload: Result<Json<TodoPayload>, JsonRejection>) -> Result<TodoPayload, ValidationError> {
    payload
        .map(|Json(p)| p)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
}
