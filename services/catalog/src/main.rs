use sea_orm::Database;
use tracing::info;

use shelf_catalog::config::CatalogConfig;
use shelf_catalog::router::build_router;
use shelf_catalog::state::AppState;
use shelf_catalog_migration::{Migrator, MigratorTrait};
use shelf_identity::CredentialManager;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    shelf_core::tracing::init_tracing("info");

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
        info!("migrations applied");
    }

    let state = AppState {
        db,
        credentials: CredentialManager::new(&config.jwt_secret),
        http: reqwest::Client::new(),
        default_avatar_url: config.default_avatar_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
