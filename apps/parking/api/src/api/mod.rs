use axum::Router;

pub mod health;
pub mod users;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// Router with the `/ready` endpoint, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::{create_router, health_router};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: None,
                run_migrations: false,
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db: None,
        }
    }

    fn app() -> Router {
        let state = memory_state();
        create_router::<ApiDoc>(routes(&state), &[])
            .unwrap()
            .merge(health_router(state.config.app))
            .merge(ready_router(state))
    }

    async fn json_of(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_users_are_served_under_api_prefix() {
        let app = app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/users")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({ "email": "jorge@correo.com", "name": "Jorge", "lastName1": "Reina" })
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(get("/api/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_of(response).await;
        assert_eq!(body["_embedded"]["userList"][0]["email"], "jorge@correo.com");
        assert_eq!(body["_embedded"]["userList"][0]["role"], "PROFESSOR");
    }

    #[tokio::test]
    async fn test_ready_reports_memory_store() {
        let response = app().oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_of(response).await,
            json!({ "status": "ready", "store": "connected" })
        );
    }

    #[tokio::test]
    async fn test_health_reports_package_name() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_of(response).await["name"], "parking_api");
    }

    #[tokio::test]
    async fn test_openapi_lists_user_paths() {
        let response = app().oneshot(get("/api-docs/openapi.json")).await.unwrap();
        let doc = json_of(response).await;
        assert!(doc["paths"]["/users"].is_object());
        assert!(doc["paths"]["/users/{id}"].is_object());
    }
}
