use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::models::Product;

use super::AppState;

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.products.list().await?))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    state
        .products
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product not found for ID: {}", id)))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let created = state.products.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(details): Json<Product>,
) -> AppResult<Json<Product>> {
    Ok(Json(state.products.update(id, details).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if !state.products.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Product not found for ID: {}",
            id
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
