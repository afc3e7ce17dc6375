//! Wire types for the todo API.
//!
//! # Design
//! Defined independently of the server crate so the client does not pull in
//! axum. The integration test runs both crates against each other and catches
//! any drift in field names or envelope shapes.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub text: String,
}

/// Request payload for `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

/// Request payload for `PATCH /todos/{id}`. The server replaces the whole
/// text; there are no other mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HealthEnvelope {
    pub ok: bool,
}

/// Body of create and update responses; `message` is informational.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TodoEnvelope {
    pub todo: Todo,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TodosEnvelope {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageEnvelope {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: String,
}
