//! Shared helpers for integration tests.

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use tally::web::handlers::AppState;
use tally::web::router::{create_health_router, create_router};
use tally::Database;

/// Create a test server backed by an in-memory database.
pub async fn create_test_server() -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::new(db.clone()));
    let router = create_router(app_state, &[]).merge(create_health_router());

    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Register a test account and return the response body.
#[allow(dead_code)]
pub async fn register_user(server: &TestServer, email: &str, name: &str, password: &str) -> Value {
    let response = server
        .post("/register")
        .json(&json!({
            "email": email,
            "name": name,
            "password": password
        }))
        .await;

    response.json::<Value>()
}

/// Sign in and return the response body.
#[allow(dead_code)]
pub async fn signin_user(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/signin")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .await;

    response.json::<Value>()
}
