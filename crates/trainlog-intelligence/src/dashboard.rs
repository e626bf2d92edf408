// ABOUTME: Store-wide dashboard figures
// ABOUTME: Athlete and session counts plus training minutes in the current ISO week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::window::{current_iso_week, iso_week_key};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::errors::AppResult;
use trainlog_core::models::TrainingSession;
use trainlog_core::store::SessionStore;

/// Global figures shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Athletes in the store
    pub total_athletes: u64,
    /// Sessions in the store, all athletes and all dates
    pub total_sessions: u64,
    /// Minutes logged in the ISO week containing today; zero when nothing matches
    pub weekly_minutes: u64,
}

/// Computes [`DashboardSummary`] over the whole store
pub struct DashboardSummarizer;

impl DashboardSummarizer {
    /// Read counts and this week's sessions from `store`
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged
    pub async fn summarize(store: &dyn SessionStore, today: NaiveDate) -> AppResult<DashboardSummary> {
        let total_athletes = store.count_athletes().await?;
        let total_sessions = store.count_sessions().await?;
        let this_week = store.list_all_sessions(&current_iso_week(today)).await?;

        let weekly_minutes = Self::weekly_minutes(this_week.iter().map(|row| &row.session), today);

        debug!(total_athletes, total_sessions, weekly_minutes, "Computed dashboard summary");
        Ok(DashboardSummary {
            total_athletes,
            total_sessions,
            weekly_minutes,
        })
    }

    /// Minutes of the sessions that share today's ISO year and week
    #[must_use]
    pub fn weekly_minutes<'a>(
        sessions: impl IntoIterator<Item = &'a TrainingSession>,
        today: NaiveDate,
    ) -> u64 {
        let current = iso_week_key(today);
        sessions
            .into_iter()
            .filter(|s| iso_week_key(s.date) == current)
            .map(TrainingSession::duration_or_zero)
            .sum()
    }
}
