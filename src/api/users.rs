use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::models::{Product, User};

use super::AppState;

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User not found for ID: {}", id))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.users.list().await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    state
        .users
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(&id))
}

pub async fn save_or_update_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> AppResult<(StatusCode, Json<User>)> {
    match user.id.clone() {
        Some(id) => {
            if state.users.get_by_id(&id).await?.is_none() {
                return Err(not_found(&id));
            }
            let updated = state.users.save(user).await?;
            Ok((StatusCode::OK, Json(updated)))
        }
        None => {
            let created = state.users.save(user).await?;
            Ok((StatusCode::CREATED, Json(created)))
        }
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut user): Json<User>,
) -> AppResult<Json<User>> {
    if state.users.get_by_id(&id).await?.is_none() {
        return Err(not_found(&id));
    }
    user.id = Some(id);
    Ok(Json(state.users.save(user).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if !state.users.delete(&id).await? {
        return Err(not_found(&id));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_user_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.products.list_by_user(&id).await?))
}

pub async fn list_approved_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.users.list_approved().await?))
}
