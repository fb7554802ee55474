//! HTTP routes: maps verbs and paths onto the services and results onto
//! status codes.

pub mod items;
pub mod products;
pub mod state;
pub mod users;

pub use state::AppState;

use axum::routing::get;
use axum::{Json, Router};
use http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn create_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Items
        .route(
            "/api/items",
            get(items::list_items).post(items::save_or_update_item),
        )
        .route("/api/items/logs", get(items::get_log_file))
        .route("/api/items/backups", get(items::get_backup_file))
        .route(
            "/api/items/:id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        // Users
        .route(
            "/api/users",
            get(users::list_users).post(users::save_or_update_user),
        )
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/users/:id/products", get(users::list_user_products))
        .route("/users/approved", get(users::list_approved_users))
        // Products
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
