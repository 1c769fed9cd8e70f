//! Integration tests for the lead activity log.
//!
//! These tests require a running PostgreSQL instance.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, create_test_pool, get_request, insert_lead, json_request,
    json_request_with_auth, parse_response_body, run_migrations, test_config, TestUser,
};
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_add_note_returns_refreshed_list() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let lead_id = insert_lead(&pool, None, None).await;
    let user = TestUser::new();
    let config = test_config();
    let uri = format!("/api/v1/leads/{}/notes", lead_id);

    for text in ["Called, no answer", "  Sent proposal  "] {
        let app = create_test_app(config.clone(), pool.clone());
        let request = json_request_with_auth(
            Method::POST,
            &uri,
            serde_json::json!({ "note_text": text }),
            &user.access_token,
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = create_test_app(config, pool);
    let response = app.oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 2);
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes[0]["note_text"], "Sent proposal");
    assert_eq!(notes[1]["note_text"], "Called, no answer");
    assert_eq!(notes[0]["created_by"], user.user_id.to_string());
    assert!(notes[0]["display_time"].as_str().unwrap().starts_with("Today at "));
}

#[tokio::test]
async fn test_notes_with_same_timestamp_list_latest_first() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let lead_id = insert_lead(&pool, None, None).await;

    for text in ["first", "second", "third"] {
        sqlx::query(
            r#"
            INSERT INTO lead_notes (lead_id, note_text, created_at, updated_at)
            VALUES ($1, $2, '2026-10-19T09:30:00Z', '2026-10-19T09:30:00Z')
            "#,
        )
        .bind(lead_id)
        .bind(text)
        .execute(&pool)
        .await
        .expect("Failed to insert note");
    }

    let app = create_test_app(test_config(), pool);
    let response = app
        .oneshot(get_request(&format!("/api/v1/leads/{}/notes", lead_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let texts: Vec<&str> = body["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["note_text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_blank_note_is_rejected_without_write() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let lead_id = insert_lead(&pool, None, None).await;
    let user = TestUser::new();

    let app = create_test_app(test_config(), pool.clone());
    let request = json_request_with_auth(
        Method::POST,
        &format!("/api/v1/leads/{}/notes", lead_id),
        serde_json::json!({ "note_text": " \n\t " }),
        &user.access_token,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Note cannot be empty");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lead_notes WHERE lead_id = $1")
        .bind(lead_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_note_for_unknown_lead_is_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let user = TestUser::new();

    let app = create_test_app(test_config(), pool);
    let request = json_request_with_auth(
        Method::POST,
        &format!("/api/v1/leads/{}/notes", Uuid::new_v4()),
        serde_json::json!({ "note_text": "Hello" }),
        &user.access_token,
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_note_requires_auth() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let lead_id = insert_lead(&pool, None, None).await;

    let app = create_test_app(test_config(), pool);
    let request = json_request(
        Method::POST,
        &format!("/api/v1/leads/{}/notes", lead_id),
        serde_json::json!({ "note_text": "Hello" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
