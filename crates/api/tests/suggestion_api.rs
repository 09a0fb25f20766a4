//! HTTP-level integration tests for the `/suggestions` endpoint.
//!
//! Only the validation path is exercised here; a valid request would call
//! the live AI provider.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, post_json_anon};
use serde_json::json;
use sqlx::PgPool;

const ALICE: i64 = 801;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_weak_topics_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/suggestions", ALICE, json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let response = post_json(
        app,
        "/api/v1/suggestions",
        ALICE,
        json!({"weak_topics": ["  ", ""]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_suggestions_require_authentication(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json_anon(app, "/api/v1/suggestions", json!({"weak_topics": ["x"]})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
