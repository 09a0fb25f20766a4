//! Health endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get_anon};
use sqlx::PgPool;

/// The health check lives at the root, outside `/api/v1`, and requires no
/// authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_ok(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get_anon(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

/// API routes are not mounted at the root.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_api_routes_not_at_root(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get_anon(app, "/courses").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
