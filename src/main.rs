use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use http::HeaderValue;
use project_api::api::{create_router, AppState};
use project_api::audit::FileAuditWriter;
use project_api::config::Config;
use project_api::db::{create_pool, run_migrations};
use project_api::repository::{PgItemRepository, PgProductRepository, PgUserRepository};
use project_api::services::{ItemService, ProductService, UserService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "project_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting project-api server...");
    tracing::info!("Connecting to database...");

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    tracing::info!("Database connection established");

    tracing::info!(
        "Item change log: {}, backup: {}",
        config.item_log_path,
        config.item_backup_path
    );

    // Wire repositories and audit writers into the services
    let items = ItemService::new(
        Arc::new(PgItemRepository::new(pool.clone())),
        Arc::new(FileAuditWriter::new(&config.item_log_path)),
        Arc::new(FileAuditWriter::new(&config.item_backup_path)),
    );
    let users = UserService::new(Arc::new(PgUserRepository::new(pool.clone())));
    let products = ProductService::new(Arc::new(PgProductRepository::new(pool)));
    let state = AppState::new(items, users, products);

    let allowed_origin: HeaderValue = config
        .cors_allowed_origin
        .parse()
        .context("Invalid CORS_ALLOWED_ORIGIN")?;
    let app = create_router(state, allowed_origin);

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
