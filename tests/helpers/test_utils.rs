// ABOUTME: Fixture builders shared by the integration tests
// ABOUTME: In-memory database, pinned-clock server resources and seed helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use axum::Router;
use chrono::NaiveDate;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use trainlog_core::models::{Athlete, AthleteId, NewAthlete, NewSession, TrainingSession};
use trainlog_intelligence::FixedClock;
use trainlog_server::config::ServerConfig;
use trainlog_server::database::Database;
use trainlog_server::resources::ServerResources;
use trainlog_server::server::build_router;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Wednesday of ISO week 25, 2025; every HTTP test pins "today" here
pub fn test_today() -> NaiveDate {
    date(2025, 6, 18)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Fresh in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Server resources over a fresh in-memory database, with the clock pinned to `today`
pub async fn create_test_resources(today: NaiveDate) -> Arc<ServerResources> {
    let database = create_test_database().await;
    let resources = ServerResources::with_clock(
        database,
        ServerConfig::default(),
        Arc::new(FixedClock::on_date(today)),
    )
    .unwrap();
    Arc::new(resources)
}

/// The full application router, middleware included
pub fn test_router(resources: &Arc<ServerResources>) -> Router {
    build_router(Arc::clone(resources))
}

pub async fn seed_athlete(database: &Database, name: &str) -> Athlete {
    database
        .create_athlete(NewAthlete {
            sport: Some("Athletics".to_owned()),
            ..NewAthlete::named(name)
        })
        .await
        .unwrap()
}

pub async fn seed_session(
    database: &Database,
    athlete_id: AthleteId,
    on: NaiveDate,
    activity_type: &str,
    duration: Option<u32>,
    score: Option<f64>,
) -> TrainingSession {
    let mut payload = NewSession::new(athlete_id, on, activity_type);
    payload.duration_minutes = duration;
    payload.score = score;
    database.create_session(payload).await.unwrap()
}
