use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{
    error::{ApiError, MALFORMED_TODO},
    model::ToDoItem,
    AppState,
};

/// Parse a request body into a `ToDoItem`. An empty body and a literal
/// `null` count as malformed, same as any JSON that does not fit the shape.
fn parse_todo(body: &[u8]) -> Result<ToDoItem, ApiError> {
    match serde_json::from_slice::<Option<ToDoItem>>(body) {
        Ok(Some(item)) => Ok(item),
        Ok(None) => {
            tracing::warn!("rejected null todo body");
            Err(ApiError::BadRequest(MALFORMED_TODO))
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected malformed todo body");
            Err(ApiError::BadRequest(MALFORMED_TODO))
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<ToDoItem>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToDoItem>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.get(id)?.clone()))
}

pub async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let input = parse_todo(&body)?;
    let created = state.store.write().await.create(input).clone();
    tracing::info!(id = created.id, "created todo");

    let location = format!("{}/todo/{}", state.prefix, created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Shared by PATCH and PUT: both apply the same merge.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<ToDoItem>, ApiError> {
    let mut store = state.store.write().await;
    // unknown ids win over bad bodies
    store.get(id)?;
    let patch = parse_todo(&body)?;
    let updated = store.update(id, patch)?.clone();
    tracing::debug!(id, ?updated, "updated todo");
    Ok(Json(updated))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ToDoItem>, ApiError> {
    let removed = state.store.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(Json(removed))
}
