use axum::Router;
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    match &state.db {
        Some(db) => handlers::router(UserService::new(PgUserRepository::new(db.clone()))),
        None => handlers::router(UserService::new(InMemoryUserRepository::new())),
    }
}
