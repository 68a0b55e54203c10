//! Entity model and typed errors.
//!
//! # Responsibilities
//! - Define the TODO record shape shared by store and handlers
//! - Define the store error taxonomy (not-found vs. everything else)
//! - Define the JSON request/response envelopes for the HTTP surface
//!
//! # Design Decisions
//! - `NotFound` is a dedicated variant, not a string: handlers match on it
//!   to pick a status code
//! - Request DTOs default missing fields so validation, not deserialization,
//!   decides what is acceptable

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single TODO row.
///
/// `id` is assigned by the store and immutable; `created_at`/`updated_at`
/// are store-assigned, with `updated_at` refreshed on every update.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub subject: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Errors surfaced by the persistence gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Update or delete matched zero rows.
    #[error("todo not found")]
    NotFound,

    /// Any other persistence failure, propagated verbatim.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// POST /todos body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateTodoRequest {
    pub subject: String,
    pub description: String,
}

/// PUT /todos body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateTodoRequest {
    pub id: i64,
    pub subject: String,
    pub description: String,
}

/// DELETE /todos body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteTodoRequest {
    pub ids: Vec<i64>,
}

/// GET /todos response envelope.
#[derive(Debug, Serialize)]
pub struct ListTodosResponse {
    pub todos: Vec<Todo>,
}

/// POST/PUT /todos response envelope.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub todo: Todo,
}

/// DELETE /todos response envelope; serializes as `{}`.
#[derive(Debug, Default, Serialize)]
pub struct DeleteTodoResponse {}
