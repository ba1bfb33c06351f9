use axum_helpers::server::{close_postgres, create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = match config.database.clone() {
        Some(database) => {
            let db = database::postgres::connect_from_config_with_retry(database, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            if config.run_migrations {
                database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
                    .await?;
            }
            Some(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory");
            None
        }
    };

    let state = AppState { config, db };
    info!("Using {} user store", state.store_name());

    let router = create_router::<openapi::ApiDoc>(
        api::routes(&state),
        &state.config.server.cors_allowed_origins,
    )?;

    // /health: liveness with app name/version
    // /ready: readiness against the user store
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting parking API with graceful shutdown (30s timeout)");

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing database connections");
            close_postgres(db, "users").await;
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Parking API shutdown complete");
    Ok(())
}
