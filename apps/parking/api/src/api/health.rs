//! Readiness check backed by the configured user store.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Reports `database` when PostgreSQL backs the users, `store` otherwise.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::with_capacity(1);

    match &state.db {
        Some(db) => checks.push((
            "database",
            Box::pin(async move {
                database::postgres::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        )),
        // Nothing to ping for the in-memory store
        None => checks.push(("store", Box::pin(async { Ok::<(), String>(()) }))),
    }

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
