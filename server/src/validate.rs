//! Input checks for todo payloads and path ids.
//!
//! Runs in the handlers before the store is touched, so a rejected request
//! never reaches a mutation. The store reuses `normalize_text` to keep the
//! non-blank invariant even when called directly.

use serde::Deserialize;
use thiserror::Error;

use crate::id::TodoId;

/// Body of `POST /todos` and `PATCH /todos/{id}`.
///
/// `text` is optional at the serde level so that a missing field reaches the
/// validator and gets a proper `{error}` response instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`text` is required")]
    MissingText,

    #[error("`text` must not be blank")]
    BlankText,

    #[error("invalid todo id: {0:?}")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// Trims `raw` and rejects it if nothing is left.
pub fn normalize_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankText);
    }
    Ok(trimmed.to_string())
}

pub fn require_text(payload: &TodoPayload) -> Result<String, ValidationError> {
    let text = payload.text.as_deref().ok_or(ValidationError::MissingText)?;
    normalize_text(text)
}

/// Accepts plain decimal digits only; `u64::from_str` alone would also take
/// a leading `+`.
pub fn parse_id(raw: &str) -> Result<TodoId, ValidationError> {
    let invalid = || ValidationError::InvalidId(raw.to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}
