// ABOUTME: Read interface of the session store consumed by the analytics engine
// ABOUTME: Lookup-by-id, counts, and date-filtered scans over athletes and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::errors::AppResult;
use crate::models::{Athlete, AthleteId, SessionFilter, SessionWithAthlete, TrainingSession};
use async_trait::async_trait;

/// Authoritative source of athlete and session records
///
/// Scans return sessions ordered by date descending, then id descending. The
/// analytics engine relies on that order for its stable tie-breaks.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up one athlete; `None` when the id is unknown
    async fn get_athlete(&self, athlete_id: AthleteId) -> AppResult<Option<Athlete>>;

    /// Number of athletes in the store
    async fn count_athletes(&self) -> AppResult<u64>;

    /// Number of sessions in the store
    async fn count_sessions(&self) -> AppResult<u64>;

    /// Sessions of one athlete within `filter`
    async fn list_sessions_by_athlete(
        &self,
        athlete_id: AthleteId,
        filter: &SessionFilter,
    ) -> AppResult<Vec<TrainingSession>>;

    /// Sessions of every athlete within `filter`, joined with the athlete name
    async fn list_all_sessions(&self, filter: &SessionFilter)
        -> AppResult<Vec<SessionWithAthlete>>;
}
