// ABOUTME: HTTP integration tests for the athletes REST API
// ABOUTME: Covers create, list ordering, get, update, delete and session cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{
    create_test_resources, date, seed_athlete, seed_session, test_router, test_today,
};
use serde_json::{json, Value};
use trainlog_core::models::SessionFilter;

// ============================================================================
// POST /api/athletes
// ============================================================================

#[tokio::test]
async fn test_create_athlete_returns_record() {
    let resources = create_test_resources(test_today()).await;

    let body: Value = AxumTestRequest::post("/api/athletes")
        .json(&json!({
            "name": "  Asha Rao ",
            "age": 22,
            "sport": "Running",
            "email": "asha@example.com",
            "phone": ""
        }))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Athlete created successfully");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["data"]["name"], "Asha Rao");
    assert_eq!(body["data"]["age"], 22);
    assert!(body["data"]["phone"].is_null());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_athlete_requires_name() {
    let resources = create_test_resources(test_today()).await;

    let body: Value = AxumTestRequest::post("/api/athletes")
        .json(&json!({"sport": "Gym"}))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(resources.database.count_athletes().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_athlete_rejects_malformed_json() {
    let resources = create_test_resources(test_today()).await;

    let body: Value = AxumTestRequest::post("/api/athletes")
        .raw_json("{\"name\": ")
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["code"], "INVALID_INPUT");
}

// ============================================================================
// GET /api/athletes and /api/athletes/:id
// ============================================================================

#[tokio::test]
async fn test_list_athletes_newest_first() {
    let resources = create_test_resources(test_today()).await;
    seed_athlete(&resources.database, "First").await;
    seed_athlete(&resources.database, "Second").await;
    seed_athlete(&resources.database, "Third").await;

    let body: Value = AxumTestRequest::get("/api/athletes")
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::OK)
        .json();

    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_get_athlete_by_id() {
    let resources = create_test_resources(test_today()).await;
    let athlete = seed_athlete(&resources.database, "Kofi").await;

    let body: Value = AxumTestRequest::get(&format!("/api/athletes/{}", athlete.id))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["data"]["name"], "Kofi");
    assert_eq!(body["data"]["sport"], "Athletics");
}

#[tokio::test]
async fn test_get_unknown_athlete_is_not_found() {
    let resources = create_test_resources(test_today()).await;

    let body: Value = AxumTestRequest::get("/api/athletes/41")
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .json();

    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Athlete not found");
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_get_athlete_with_malformed_id() {
    let resources = create_test_resources(test_today()).await;

    let body: Value = AxumTestRequest::get("/api/athletes/not-a-number")
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .json();

    assert_eq!(body["code"], "INVALID_INPUT");
}

// ============================================================================
// PUT /api/athletes/:id
// ============================================================================

#[tokio::test]
async fn test_update_athlete_replaces_fields() {
    let resources = create_test_resources(test_today()).await;
    let athlete = seed_athlete(&resources.database, "Mei").await;

    let body: Value = AxumTestRequest::put(&format!("/api/athletes/{}", athlete.id))
        .json(&json!({"name": "Mei Lin", "age": 30}))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["message"], "Athlete updated successfully");
    assert_eq!(body["data"]["name"], "Mei Lin");
    assert_eq!(body["data"]["age"], 30);
    assert!(body["data"]["sport"].is_null());

    let stored = resources
        .database
        .get_athlete(athlete.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Mei Lin");
    assert_eq!(stored.created_at, athlete.created_at);
}

#[tokio::test]
async fn test_update_unknown_athlete_is_not_found() {
    let resources = create_test_resources(test_today()).await;

    AxumTestRequest::put("/api/athletes/77")
        .json(&json!({"name": "Nobody"}))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// DELETE /api/athletes/:id
// ============================================================================

#[tokio::test]
async fn test_delete_athlete_cascades_sessions() {
    let resources = create_test_resources(test_today()).await;
    let db = &resources.database;
    let keep = seed_athlete(db, "Keep").await;
    let gone = seed_athlete(db, "Gone").await;
    seed_session(db, keep.id, date(2025, 6, 2), "Running", Some(30), None).await;
    seed_session(db, gone.id, date(2025, 6, 3), "Gym", Some(45), None).await;
    seed_session(db, gone.id, date(2025, 6, 4), "Gym", Some(50), None).await;

    let body: Value = AxumTestRequest::delete(&format!("/api/athletes/{}", gone.id))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Athlete deleted successfully");
    assert!(body.get("data").is_none());

    assert_eq!(db.count_athletes().await.unwrap(), 1);
    let remaining = db.list_sessions(&SessionFilter::all()).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].session.athlete_id, keep.id);

    AxumTestRequest::delete(&format!("/api/athletes/{}", gone.id))
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
