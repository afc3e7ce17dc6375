//! JSON envelopes returned by the HTTP handlers.

use serde::{Deserialize, Serialize};

use crate::store::Todo;

pub const TODO_ADDED: &str = "Todo added!";
pub const TODO_UPDATED: &str = "Todo updated";
pub const TODO_DELETED: &str = "Todo deleted!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}

/// `POST /todos` and `PATCH /todos/{id}` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoMessage {
    pub message: String,
    pub todo: Todo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoBody {
    pub todo: Todo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
