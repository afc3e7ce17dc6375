//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes the matching `HttpResponse`. Every endpoint answers 200 on
//! success and wraps its payload in a JSON envelope, which `parse_*` unwraps.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateTodo, ErrorEnvelope, HealthEnvelope, MessageEnvelope, Todo, TodoEnvelope,
    TodosEnvelope, UpdateTodo,
};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/health".to_string())
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, "/todos".to_string())
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Get, format!("/todos/{id}"))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/todos".to_string(), input)
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Patch, format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, format!("/todos/{id}"))
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<bool, ApiError> {
        decode::<HealthEnvelope>(&response).map(|h| h.ok)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        decode::<TodosEnvelope>(&response).map(|e| e.todos)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode::<TodoEnvelope>(&response).map(|e| e.todo)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode::<TodoEnvelope>(&response).map(|e| e.todo)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode::<TodoEnvelope>(&response).map(|e| e.todo)
    }

    /// Returns the server's confirmation message.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        decode::<MessageEnvelope>(&response).map(|e| e.message)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let mut req = self.bare(method, path);
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        req.body = Some(body);
        Ok(req)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    check_status(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-200 status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => Err(ApiError::BadRequest(error_message(&response.body))),
        404 => Err(ApiError::NotFound(error_message(&response.body))),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

/// The `error` field of an error body, or the raw body if it has none.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
