//! HTTP-level integration tests for the comments nested under reviews.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{assert_error, body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// GET /api/reviews/{review_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_list_comments_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/3/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 3);

    let newest = &comments[0];
    assert_eq!(newest["comment_id"], 6);
    assert_eq!(
        newest["body"],
        "Not sure about dogs, but my cat likes to get involved with board games, the boxes are their particular favourite"
    );
    assert_eq!(newest["votes"], 10);
    assert_eq!(newest["author"], "philippaclaire9");
    assert_eq!(newest["review_id"], 3);
    assert_eq!(newest["created_at"], "2021-03-27T19:48:58.110Z");

    let dates: Vec<&str> = comments
        .iter()
        .map(|c| c["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_list_comments_for_review_without_comments_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/1/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["comments"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_list_comments_for_nonexistent_review_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/999/comments").await;
    assert_error(
        response,
        StatusCode::NOT_FOUND,
        "review with id: 999 does not exist",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_list_comments_with_invalid_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/reviews/invalid_type/comments").await;
    assert_error(response, StatusCode::BAD_REQUEST, "input is not valid").await;
}

// ---------------------------------------------------------------------------
// POST /api/reviews/{review_id}/comments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"author": "dav3rid", "body": "Sheep everywhere"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let comment = &json["comment"];
    assert_eq!(comment["comment_id"], 7);
    assert_eq!(comment["author"], "dav3rid");
    assert_eq!(comment["body"], "Sheep everywhere");
    assert_eq!(comment["review_id"], 1);
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/reviews/1").await).await;
    assert_eq!(json["reviews"]["comment_count"], "1");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_accepts_username_alias(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/2/comments",
        json!({"username": "bainesface", "body": "Wobbly"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["comment"]["author"], "bainesface");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_without_body_returns_400_missing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/reviews/1/comments", json!({"author": "dav3rid"})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "input is missing").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_without_author_returns_400_missing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/reviews/1/comments", json!({"body": "Anonymous"})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "input is missing").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_without_request_body_returns_400_missing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/reviews/1/comments")
        .body(Body::empty())
        .unwrap();
    let response = common::send(app, request).await;
    assert_error(response, StatusCode::BAD_REQUEST, "input is missing").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_with_unparseable_body_returns_400_not_valid(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/reviews/1/comments")
        .header("content-type", "application/json")
        .body(Body::from("{\"author\": "))
        .unwrap();
    let response = common::send(app, request).await;
    assert_error(response, StatusCode::BAD_REQUEST, "input is not valid").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_with_wrong_field_type_returns_400_not_valid(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"author": "dav3rid", "body": 42}),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "input is not valid").await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_on_nonexistent_review_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/999/comments",
        json!({"author": "dav3rid", "body": "Hello?"}),
    )
    .await;
    assert_error(
        response,
        StatusCode::NOT_FOUND,
        "review with id: 999 does not exist",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("../../../db/fixtures/test_data.sql"))]
async fn test_create_comment_by_unknown_user_returns_500(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/reviews/1/comments",
        json!({"author": "nobody", "body": "Who am I"}),
    )
    .await;
    assert_error(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error",
    )
    .await;
}
