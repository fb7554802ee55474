use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::models::Item;

use super::AppState;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Item not found for ID: {}", id))
}

pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    Ok(Json(state.items.list().await?))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Item>> {
    state
        .items
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// Creates the item when the body has no id (201). With an id, the item
/// must already exist and is replaced (200); an unknown id is 404.
pub async fn save_or_update_item(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> AppResult<(StatusCode, Json<Item>)> {
    match item.id {
        Some(id) => {
            if state.items.get_by_id(id).await?.is_none() {
                return Err(not_found(id));
            }
            let updated = state.items.save(item).await?;
            Ok((StatusCode::OK, Json(updated)))
        }
        None => {
            let created = state.items.save(item).await?;
            Ok((StatusCode::CREATED, Json(created)))
        }
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(mut item): Json<Item>,
) -> AppResult<Json<Item>> {
    if state.items.get_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }
    item.id = Some(id);
    Ok(Json(state.items.save(item).await?))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if state.items.get_by_id(id).await?.is_none() {
        return Err(not_found(id));
    }
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_log_file(State(state): State<AppState>) -> Response {
    match state.items.read_log().await {
        Ok(logs) => (StatusCode::OK, logs).into_response(),
        Err(AppError::Io(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error reading log file: {}", e),
        )
            .into_response(),
        Err(other) => other.into_response(),
    }
}

pub async fn get_backup_file(State(state): State<AppState>) -> Response {
    match state.items.read_backup().await {
        Ok(backups) => (StatusCode::OK, backups).into_response(),
        Err(AppError::Io(e)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error reading backup file: {}", e),
        )
            .into_response(),
        Err(other) => other.into_response(),
    }
}
