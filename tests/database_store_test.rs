// ABOUTME: Integration tests for the SQLite session store
// ABOUTME: Scan ordering, inclusive date filters, counts, file persistence and closed pools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::test_utils::{create_test_database, date, seed_athlete, seed_session};
use tempfile::TempDir;
use trainlog_core::errors::ErrorCode;
use trainlog_core::models::{AthleteId, NewAthlete, SessionFilter, SessionId};
use trainlog_core::store::SessionStore;
use trainlog_server::database::Database;

#[tokio::test]
async fn test_scan_order_is_date_then_id_descending() {
    let db = create_test_database().await;
    let athlete = seed_athlete(&db, "Asha").await;
    let early = seed_session(&db, athlete.id, date(2025, 5, 1), "Running", Some(10), None).await;
    let same_day_a = seed_session(&db, athlete.id, date(2025, 5, 3), "Gym", Some(20), None).await;
    let same_day_b = seed_session(&db, athlete.id, date(2025, 5, 3), "Yoga", Some(30), None).await;
    let middle = seed_session(&db, athlete.id, date(2025, 5, 2), "Running", Some(40), None).await;

    let store: &dyn SessionStore = &db;
    let ids: Vec<SessionId> = store
        .list_sessions_by_athlete(athlete.id, &SessionFilter::all())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(ids, vec![same_day_b.id, same_day_a.id, middle.id, early.id]);
}

#[tokio::test]
async fn test_date_filter_bounds_are_inclusive() {
    let db = create_test_database().await;
    let athlete = seed_athlete(&db, "Asha").await;
    for day in 1..=5 {
        seed_session(&db, athlete.id, date(2025, 5, day), "Running", Some(day), None).await;
    }

    let filter = SessionFilter::between(date(2025, 5, 2), date(2025, 5, 4));
    let store: &dyn SessionStore = &db;

    let own = store.list_sessions_by_athlete(athlete.id, &filter).await.unwrap();
    let days: Vec<u32> = own.iter().filter_map(|s| s.duration_minutes).collect();
    assert_eq!(days, vec![4, 3, 2]);

    let open_ended = SessionFilter {
        from: Some(date(2025, 5, 4)),
        to: None,
    };
    let all = store.list_all_sessions(&open_ended).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|row| row.athlete_name == "Asha"));
}

#[tokio::test]
async fn test_scans_are_scoped_to_one_athlete() {
    let db = create_test_database().await;
    let asha = seed_athlete(&db, "Asha").await;
    let kofi = seed_athlete(&db, "Kofi").await;
    seed_session(&db, asha.id, date(2025, 5, 1), "Running", Some(10), None).await;
    seed_session(&db, kofi.id, date(2025, 5, 1), "Cricket", Some(90), None).await;

    let sessions = db
        .list_sessions_for_athlete(kofi.id, &SessionFilter::all())
        .await
        .unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].activity_type, "Cricket");

    let none = db
        .list_sessions_for_athlete(AthleteId::new(999), &SessionFilter::all())
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_counts_and_athlete_lookup() {
    let db = create_test_database().await;
    let store: &dyn SessionStore = &db;
    assert_eq!(store.count_athletes().await.unwrap(), 0);
    assert_eq!(store.count_sessions().await.unwrap(), 0);

    let athlete = seed_athlete(&db, "Asha").await;
    seed_session(&db, athlete.id, date(2025, 5, 1), "Running", None, Some(4.5)).await;

    assert_eq!(store.count_athletes().await.unwrap(), 1);
    assert_eq!(store.count_sessions().await.unwrap(), 1);
    assert_eq!(
        store.get_athlete(athlete.id).await.unwrap().unwrap().name,
        "Asha"
    );
    assert!(store.get_athlete(AthleteId::new(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_optional_fields_round_trip_as_absent() {
    let db = create_test_database().await;
    let athlete = seed_athlete(&db, "Asha").await;
    let created = seed_session(&db, athlete.id, date(2025, 5, 1), "Swim", None, None).await;

    let stored = db.get_session(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
    assert_eq!(stored.duration_minutes, None);
    assert_eq!(stored.score, None);
    assert_eq!(stored.notes, None);
}

#[tokio::test]
async fn test_file_database_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("trainlog.db").display());

    let db = Database::new(&url).await.unwrap();
    let athlete = db.create_athlete(NewAthlete::named("Persisted")).await.unwrap();
    seed_session(&db, athlete.id, date(2025, 5, 1), "Running", Some(30), None).await;
    db.close().await;

    let reopened = Database::new(&url).await.unwrap();
    assert_eq!(reopened.count_athletes().await.unwrap(), 1);
    assert_eq!(reopened.count_sessions().await.unwrap(), 1);
    assert_eq!(
        reopened.get_athlete(athlete.id).await.unwrap().unwrap().name,
        "Persisted"
    );
}

#[tokio::test]
async fn test_closed_pool_is_unavailable() {
    let db = create_test_database().await;
    db.close().await;

    let error = db.count_sessions().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StoreUnavailable);
    assert_eq!(error.http_status(), 503);
}
