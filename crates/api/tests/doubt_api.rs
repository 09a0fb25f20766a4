//! HTTP-level integration tests for the `/doubts` API endpoints.
//!
//! Doubts are seeded through the repository layer (the ask flow would
//! call the live AI provider) and then read back through the HTTP API.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, post_json_anon};
use serde_json::json;
use sqlx::PgPool;

use smarttutor_db::repositories::DoubtRepo;

const ALICE: i64 = 701;
const BOB: i64 = 702;

async fn seed_doubts(pool: &PgPool, user_id: i64, count: usize) {
    for n in 0..count {
        DoubtRepo::create(
            pool,
            user_id,
            &format!("Question {n}"),
            "Because the borrow checker says so.",
            None,
            None,
            None,
        )
        .await
        .unwrap();
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_defaults(pool: PgPool) {
    seed_doubts(&pool, ALICE, 3).await;
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/doubts/history", ALICE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 20);
    assert_eq!(json["total"], 3);
    assert_eq!(json["has_more"], false);
    assert_eq!(json["results"].as_array().unwrap().len(), 3);
    // Newest first.
    assert_eq!(json["results"][0]["question"], "Question 2");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_pagination_window(pool: PgPool) {
    seed_doubts(&pool, ALICE, 25).await;
    let app = build_test_app(pool);

    let page1 = body_json(
        get(app.clone(), "/api/v1/doubts/history?page=1&page_size=10", ALICE).await,
    )
    .await;
    assert_eq!(page1["results"].as_array().unwrap().len(), 10);
    assert_eq!(page1["total"], 25);
    assert_eq!(page1["has_more"], true);

    let page3 = body_json(
        get(app, "/api/v1/doubts/history?page=3&page_size=10", ALICE).await,
    )
    .await;
    assert_eq!(page3["results"].as_array().unwrap().len(), 5);
    assert_eq!(page3["has_more"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_forgives_malformed_parameters(pool: PgPool) {
    seed_doubts(&pool, ALICE, 2).await;
    let app = build_test_app(pool);

    // Garbage paging values fall back to defaults rather than erroring.
    let response = get(
        app.clone(),
        "/api/v1/doubts/history?page=banana&page_size=-3&session_id=abc",
        ALICE,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 20);
    assert_eq!(json["total"], 2);

    // Oversized page_size falls back to the default, not the maximum.
    let json = body_json(
        get(app, "/api/v1/doubts/history?page_size=5000", ALICE).await,
    )
    .await;
    assert_eq!(json["page_size"], 20);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_is_scoped_to_the_caller(pool: PgPool) {
    seed_doubts(&pool, ALICE, 2).await;
    seed_doubts(&pool, BOB, 5).await;
    let app = build_test_app(pool);

    let json = body_json(get(app, "/api/v1/doubts/history", ALICE).await).await;
    assert_eq!(json["total"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_question_rejected_before_the_ai_call(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app, "/api/v1/doubts", ALICE, json!({"question": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_asking_into_a_foreign_session_is_404(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let session = body_json(
        post_json(
            app.clone(),
            "/api/v1/doubts/sessions",
            ALICE,
            json!({"title": "Alice's session"}),
        )
        .await,
    )
    .await;
    let session_id = session["data"]["id"].as_i64().unwrap();

    // Ownership check runs before the AI call, so nothing leaves the process.
    let response = post_json(
        app,
        "/api/v1/doubts",
        BOB,
        json!({"question": "What is a trait?", "session": session_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nothing was persisted for Bob.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM doubts WHERE user_id = $1")
        .bind(BOB)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_asking_requires_authentication(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json_anon(app, "/api/v1/doubts", json!({"question": "hi"})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_a_doubt_is_ownership_scoped(pool: PgPool) {
    let doubt = DoubtRepo::create(&pool, ALICE, "Mine", "answer", None, None, None)
        .await
        .unwrap();
    let app = build_test_app(pool);
    let path = format!("/api/v1/doubts/history/{}", doubt.id);

    let response = delete(app.clone(), &path, BOB).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app.clone(), &path, ALICE).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, "/api/v1/doubts/history", ALICE).await).await;
    assert_eq!(json["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_clear_all_reports_the_count(pool: PgPool) {
    seed_doubts(&pool, ALICE, 4).await;
    seed_doubts(&pool, BOB, 1).await;
    let app = build_test_app(pool);

    let response = delete(app.clone(), "/api/v1/doubts/clear-all", ALICE).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], 4);

    // Bob's history is untouched.
    let json = body_json(get(app, "/api/v1/doubts/history", BOB).await).await;
    assert_eq!(json["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_session_lifecycle(pool: PgPool) {
    let app = build_test_app(pool);

    let created = body_json(
        post_json(
            app.clone(),
            "/api/v1/doubts/sessions",
            ALICE,
            json!({"title": "Traits"}),
        )
        .await,
    )
    .await;
    let session_id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["title"], "Traits");

    let listed = body_json(get(app.clone(), "/api/v1/doubts/sessions", ALICE).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);

    // Another user sees neither the list entry nor the delete target.
    let listed = body_json(get(app.clone(), "/api/v1/doubts/sessions", BOB).await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
    let response = delete(
        app.clone(),
        &format!("/api/v1/doubts/sessions/{session_id}"),
        BOB,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        app.clone(),
        &format!("/api/v1/doubts/sessions/{session_id}"),
        ALICE,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(get(app, "/api/v1/doubts/sessions", ALICE).await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_session_creation_validates_course_links(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/doubts/sessions",
        ALICE,
        json!({"title": "Orphan", "course": 9999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
