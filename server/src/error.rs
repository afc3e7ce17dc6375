//! Translation of handler failures into HTTP responses.
//!
//! Every failure is rendered as `{"error": "..."}`. Internal failures carry
//! a fixed message; their detail only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::id::TodoId;
use crate::store::StoreError;
use crate::types::ErrorBody;
use crate::validate::ValidationError;

pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred!";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Todo {0} not found!")]
    NotFound(TodoId),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::Invalid(e) => ApiError::Validation(e),
            e @ StoreError::IdsExhausted => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            ApiError::Internal(detail) => {
                log::error!("request failed: {detail}");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => {
                log::warn!("request rejected ({status}): {other}");
                other.to_string()
            }
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
