// ABOUTME: SessionStore implementation over the SQLite database
// ABOUTME: Lets the analytics engine read athletes and sessions without knowing about sqlx
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::Database;
use async_trait::async_trait;
use trainlog_core::errors::AppResult;
use trainlog_core::models::{Athlete, AthleteId, SessionFilter, SessionWithAthlete, TrainingSession};
use trainlog_core::store::SessionStore;

#[async_trait]
impl SessionStore for Database {
    async fn get_athlete(&self, athlete_id: AthleteId) -> AppResult<Option<Athlete>> {
        Self::get_athlete(self, athlete_id).await
    }

    async fn count_athletes(&self) -> AppResult<u64> {
        Self::count_athletes(self).await
    }

    async fn count_sessions(&self) -> AppResult<u64> {
        Self::count_sessions(self).await
    }

    async fn list_sessions_by_athlete(
        &self,
        athlete_id: AthleteId,
        filter: &SessionFilter,
    ) -> AppResult<Vec<TrainingSession>> {
        self.list_sessions_for_athlete(athlete_id, filter).await
    }

    async fn list_all_sessions(&self, filter: &SessionFilter) -> AppResult<Vec<SessionWithAthlete>> {
        self.list_sessions(filter).await
    }
}
