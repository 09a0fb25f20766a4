//! Shared helpers for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery)
//! that production uses. Requests are driven through `tower::ServiceExt`
//! without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use smarttutor_ai::{AiClient, AiConfig};
use smarttutor_api::auth::jwt::{generate_token, JwtConfig};
use smarttutor_api::config::ServerConfig;
use smarttutor_api::router::build_app_router;
use smarttutor_api::state::AppState;

const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
///
/// The AI endpoint is an unroutable local address with a one-second
/// timeout: no test in this suite performs a live AI call, and anything
/// that accidentally does fails fast instead of hanging.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
        ai: AiConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: String::new(),
            timeout_secs: 1,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let ai = Arc::new(AiClient::new(&config.ai));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai,
    };

    build_app_router(state, &config)
}

/// Mint a valid bearer token for a user, the way the identity provider
/// would.
pub fn token_for(user_id: i64) -> String {
    let config = JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
    };
    generate_token(user_id, 3600, &config).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    path: &str,
    user_id: Option<i64>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user_id) = user_id {
        builder = builder.header(
            header::AUTHORIZATION,
            format!("Bearer {}", token_for(user_id)),
        );
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// GET as an authenticated user.
pub async fn get(app: Router, path: &str, user_id: i64) -> Response {
    send(app, Method::GET, path, Some(user_id), None).await
}

/// GET without an Authorization header.
pub async fn get_anon(app: Router, path: &str) -> Response {
    send(app, Method::GET, path, None, None).await
}

/// POST a JSON body as an authenticated user.
pub async fn post_json(
    app: Router,
    path: &str,
    user_id: i64,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, path, Some(user_id), Some(body)).await
}

/// POST a JSON body without an Authorization header.
pub async fn post_json_anon(app: Router, path: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, path, None, Some(body)).await
}

/// DELETE as an authenticated user.
pub async fn delete(app: Router, path: &str, user_id: i64) -> Response {
    send(app, Method::DELETE, path, Some(user_id), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
