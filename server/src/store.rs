//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` keeps todos in a `Vec` so listing follows insertion order, and
//! owns the `IdGenerator` so id allocation and insertion happen under the same
//! write lock. Every operation takes the lock exactly once; a failed
//! `create` or `update` returns before anything is written.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::id::{IdGenerator, TodoId};
use crate::validate::{normalize_text, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("todo id space exhausted")]
    IdsExhausted,
}

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    ids: IdGenerator,
}

impl Inner {
    fn position(&self, id: TodoId) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

/// The authoritative todo collection. Share it as `Arc<TodoStore>`.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::with_id_generator(IdGenerator::new())
    }

    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            inner: RwLock::new(Inner {
                todos: Vec::new(),
                ids,
            }),
        }
    }

    /// Stores a new todo with the trimmed `text`.
    pub async fn create(&self, text: &str) -> Result<Todo, StoreError> {
        let text = normalize_text(text)?;
        let mut inner = self.inner.write().await;
        let id = inner.ids.next_id().ok_or(StoreError::IdsExhausted)?;
        let todo = Todo { id, text };
        inner.todos.push(todo.clone());
        log::debug!("created todo {id}");
        Ok(todo)
    }

    pub async fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        let inner = self.inner.read().await;
        let idx = inner.position(id)?;
        Ok(inner.todos[idx].clone())
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.todos.clone()
    }

    /// Replaces the text of an existing todo. Blank text is rejected before
    /// the id is looked up.
    pub async fn update(&self, id: TodoId, text: &str) -> Result<Todo, StoreError> {
        let text = normalize_text(text)?;
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        let todo = &mut inner.todos[idx];
        todo.text = text;
        log::debug!("updated todo {id}");
        Ok(todo.clone())
    }

    /// Deletes a todo. Removing an id that is not stored is `NotFound`.
    pub async fn remove(&self, id: TodoId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner.position(id)?;
        inner.todos.remove(idx);
        log::debug!("removed todo {id}");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
