//! Handler tests for the Users domain
//!
//! These drive the users router directly with `oneshot` over the in-memory
//! store, checking status codes, wire field names and error bodies.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn jorge() -> Value {
    json!({
        "email": "jorge@correo.com",
        "name": "Jorge",
        "lastName1": "Reina",
        "lastName2": "Romero",
        "role": "PROFESSOR"
    })
}

async fn register(app: &Router, payload: Value) -> User {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_register_returns_201_with_stored_user() {
    let app = app();

    let user = register(&app, jorge()).await;

    assert_eq!(user.email, "jorge@correo.com");
    assert_eq!(user.last_name1, "Reina");
    assert_eq!(user.last_name2.as_deref(), Some("Romero"));
    assert_eq!(user.role, Role::Professor);
}

#[tokio::test]
async fn test_get_user_returns_camel_case_fields() {
    let app = app();
    let user = register(&app, jorge()).await;

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", user.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], user.id);
    assert_eq!(body["lastName1"], "Reina");
    assert_eq!(body["lastName2"], "Romero");
    assert_eq!(body["role"], "PROFESSOR");
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    let response = app().oneshot(empty_request("GET", "/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let response = app()
        .oneshot(empty_request("GET", "/not-a-number"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_missing_email_returns_422_with_message() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "David", "lastName1": "Hormigo" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "El correo es obligatorio");
}

#[tokio::test]
async fn test_missing_name_returns_422_with_message() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "email": "da@correo.es", "name": "", "lastName1": "Hormigo" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "El nombre es obligatorio");
}

#[tokio::test]
async fn test_missing_last_name1_returns_422_with_message() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "email": "da@correo.es", "name": "David" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "El primer apellido es obligatorio");
}

#[tokio::test]
async fn test_duplicate_email_returns_409() {
    let app = app();
    register(&app, jorge()).await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/", jorge()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], DUPLICATE_EMAIL_MESSAGE);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_uses_embedded_envelope_in_creation_order() {
    let app = app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "_embedded": { "userList": [] } }));

    register(&app, jorge()).await;
    register(
        &app,
        json!({ "email": "da@correo.es", "name": "David", "lastName1": "Hormigo" }),
    )
    .await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let list: UserListResponse = json_body(response.into_body()).await;
    let emails: Vec<&str> = list
        .embedded
        .user_list
        .iter()
        .map(|u| u.email.as_str())
        .collect();
    assert_eq!(emails, ["jorge@correo.com", "da@correo.es"]);
}

#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let app = app();
    let user = register(
        &app,
        json!({ "email": "jorge@correo.com", "name": "Jorge", "lastName1": "Perez", "role": "STUDENT" }),
    )
    .await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/{}", user.id),
            json!({ "name": "David", "lastName1": "Reina", "lastName2": "Romero" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.email, "jorge@correo.com");
    assert_eq!(updated.role, Role::Student);
    assert_eq!(updated.name, "David");
    assert_eq!(updated.last_name1, "Reina");
    assert_eq!(updated.last_name2.as_deref(), Some("Romero"));
}

#[tokio::test]
async fn test_patch_missing_user_returns_404() {
    let response = app()
        .oneshot(json_request("PATCH", "/12", json!({ "name": "David" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let app = app();
    let user = register(&app, jorge()).await;
    let uri = format!("/{}", user.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
