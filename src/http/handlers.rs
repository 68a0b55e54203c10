//! CRUD handlers for the /todos surface.
//!
//! # Responsibilities
//! - Translate HTTP semantics (query params, JSON bodies) into store calls
//! - Validate before touching the store (zero id, empty subject, empty ids)
//! - Own the error-to-status mapping; the store never picks status codes
//!
//! # Status mapping
//! - validation failure → 400, no store call
//! - malformed body → 502 on POST/PUT, 500 on DELETE (per-route mapping is
//!   deliberate, kept from the original contract)
//! - store not-found → 404, any other store error → 502

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::model::{
    CreateTodoRequest, DeleteTodoRequest, DeleteTodoResponse, ListTodosResponse, StoreError,
    TodoResponse, UpdateTodoRequest,
};

/// Raw pagination parameters; parsed by hand so a malformed value maps to
/// the documented 502 instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub prev_id: Option<String>,
    pub size: Option<String>,
}

/// GET /todos
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let prev_id = match parse_cursor(params.prev_id.as_deref(), "0") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let size = match parse_cursor(params.size.as_deref(), "5") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.store.read(prev_id, size).await {
        Ok(todos) => Json(ListTodosResponse { todos }).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// POST /todos
pub async fn create_todo(State(state): State<AppState>, body: Bytes) -> Response {
    let request: CreateTodoRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(err) => return (StatusCode::BAD_GATEWAY, err.to_string()).into_response(),
    };

    if request.subject.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.store.create(&request.subject, &request.description).await {
        Ok(todo) => Json(TodoResponse { todo }).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// PUT /todos
pub async fn update_todo(State(state): State<AppState>, body: Bytes) -> Response {
    let request: UpdateTodoRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(err) => return (StatusCode::BAD_GATEWAY, err.to_string()).into_response(),
    };

    if request.id == 0 || request.subject.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state
        .store
        .update(request.id, &request.subject, &request.description)
        .await
    {
        Ok(todo) => Json(TodoResponse { todo }).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// DELETE /todos
pub async fn delete_todos(State(state): State<AppState>, body: Bytes) -> Response {
    let request: DeleteTodoRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    if request.ids.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.store.delete(&request.ids).await {
        Ok(()) => Json(DeleteTodoResponse::default()).into_response(),
        Err(err) => store_error_response(err),
    }
}

/// Any other method on /todos.
pub async fn method_not_supported() -> Response {
    StatusCode::BAD_REQUEST.into_response()
}

/// Parse a pagination parameter, falling back to its documented default
/// when absent. A present but non-integer value fails the request with 502.
fn parse_cursor(value: Option<&str>, default: &str) -> Result<i64, Response> {
    let raw = match value {
        Some("") | None => default,
        Some(v) => v,
    };
    raw.parse::<i64>()
        .map_err(|err| (StatusCode::BAD_GATEWAY, err.to_string()).into_response())
}

fn store_error_response(err: StoreError) -> Response {
    match err {
        StoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
        StoreError::Database(e) => {
            tracing::error!(error = %e, "store call failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(result: Result<i64, Response>) -> Option<StatusCode> {
        result.err().map(|r| r.status())
    }

    #[test]
    fn cursor_defaults_apply_when_absent_or_empty() {
        assert_eq!(parse_cursor(None, "0").unwrap(), 0);
        assert_eq!(parse_cursor(Some(""), "5").unwrap(), 5);
        assert_eq!(parse_cursor(Some("17"), "0").unwrap(), 17);
    }

    #[test]
    fn non_integer_cursor_is_bad_gateway() {
        assert_eq!(status_of(parse_cursor(Some("abc"), "0")), Some(StatusCode::BAD_GATEWAY));
        assert_eq!(status_of(parse_cursor(Some("1.5"), "5")), Some(StatusCode::BAD_GATEWAY));
    }

    #[test]
    fn store_errors_map_to_documented_statuses() {
        assert_eq!(
            store_error_response(StoreError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            store_error_response(StoreError::Database(sqlx::Error::PoolClosed)).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
