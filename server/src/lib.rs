//! In-memory todo service over HTTP.
//!
//! # Overview
//! A single-resource CRUD store (`TodoStore`) behind an axum router. Each
//! request is validated, applied to the store under its lock, and rendered
//! as a JSON envelope; failures come back as `{"error": ...}` with 400, 404
//! or 500.
//!
//! # Design
//! - The store is an explicit value injected into the router as state, so
//!   every test can start from an empty collection.
//! - Store operations return typed `StoreError`s; `ApiError` is the only
//!   place they become HTTP statuses.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod id;
pub mod routes;
pub mod store;
pub mod types;
pub mod validate;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use id::{IdGenerator, TodoId};
pub use routes::{router, SharedStore};
pub use store::{StoreError, Todo, TodoStore};
pub use validate::{TodoPayload, ValidationError};

/// A router over a fresh, empty store.
pub fn app() -> Router {
    router(SharedStore::default())
}

/// Serves `app()` on `listener` until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}
