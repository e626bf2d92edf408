// ABOUTME: Entry point of the analytics engine for one athlete or the whole store
// ABOUTME: Resolves the athlete, reads sessions once per call and fans out to the analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::clock::Clock;
use crate::dashboard::{DashboardSummarizer, DashboardSummary};
use crate::frequency::{ActivityStat, FrequencyAnalyzer};
use crate::progress::{MonthlyProgress, ProgressCalculator};
use crate::recommendation_engine::{RecommendationEngine, RecommendationSet};
use crate::time_window::{MonthlyBucket, TimeWindowAggregator, WeeklyBucket};
use crate::window::TrailingWindow;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use trainlog_core::constants::analytics::{
    DEFAULT_MONTHLY_WINDOW_MONTHS, DEFAULT_PROGRESS_WINDOW_MONTHS, DEFAULT_WEEKLY_WINDOW_WEEKS,
};
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::{Athlete, AthleteId, SessionFilter, TrainingSession};
use trainlog_core::store::SessionStore;

/// Default widths applied when a request does not choose its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsWindows {
    /// Weekly training-time window, in weeks
    pub weekly_weeks: u32,
    /// Monthly training-time window, in months
    pub monthly_months: u32,
    /// Progress window, in months
    pub progress_months: u32,
}

impl Default for AnalyticsWindows {
    fn default() -> Self {
        Self {
            weekly_weeks: DEFAULT_WEEKLY_WINDOW_WEEKS,
            monthly_months: DEFAULT_MONTHLY_WINDOW_MONTHS,
            progress_months: DEFAULT_PROGRESS_WINDOW_MONTHS,
        }
    }
}

/// Every per-athlete analysis in one payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsBundle {
    /// Weekly minutes over the default weekly window
    pub weekly: Vec<WeeklyBucket>,
    /// Frequency distribution over the full history
    pub activities: Vec<ActivityStat>,
    /// Progress series over the default progress window
    pub progress: Vec<MonthlyProgress>,
    /// Suggestions derived from `activities`
    pub recommendations: RecommendationSet,
}

/// Composes the analyzers over a session store and a clock
///
/// Holds no state between calls; every method recomputes from the store.
#[derive(Clone)]
pub struct AnalyticsFacade {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    windows: AnalyticsWindows,
}

impl AnalyticsFacade {
    /// Create a facade with the default windows
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            windows: AnalyticsWindows::default(),
        }
    }

    /// Replace the default windows
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a width is outside its accepted range
    pub fn with_windows(mut self, windows: AnalyticsWindows) -> AppResult<Self> {
        TrailingWindow::weeks(windows.weekly_weeks)?;
        TrailingWindow::months(windows.monthly_months)?;
        TrailingWindow::months(windows.progress_months)?;
        self.windows = windows;
        Ok(self)
    }

    /// Windows currently in effect
    #[must_use]
    pub const fn windows(&self) -> AnalyticsWindows {
        self.windows
    }

    /// Minutes per ISO week for one athlete, newest first
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown athlete, `ValueOutOfRange` for a bad
    /// `weeks`, or whatever the store reports
    pub async fn weekly_training_time(
        &self,
        athlete_id: AthleteId,
        weeks: Option<u32>,
    ) -> AppResult<Vec<WeeklyBucket>> {
        let window = TrailingWindow::weeks(weeks.unwrap_or(self.windows.weekly_weeks))?;
        let today = self.clock.today();
        let sessions = self.athlete_sessions(athlete_id, &window.filter(today)).await?;
        Ok(TimeWindowAggregator::weekly_totals(&sessions, window, today))
    }

    /// Minutes per calendar month for one athlete, newest first
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown athlete, `ValueOutOfRange` for a bad
    /// `months`, or whatever the store reports
    pub async fn monthly_training_time(
        &self,
        athlete_id: AthleteId,
        months: Option<u32>,
    ) -> AppResult<Vec<MonthlyBucket>> {
        let window = TrailingWindow::months(months.unwrap_or(self.windows.monthly_months))?;
        let today = self.clock.today();
        let sessions = self.athlete_sessions(athlete_id, &window.filter(today)).await?;
        Ok(TimeWindowAggregator::monthly_totals(&sessions, window, today))
    }

    /// Activity frequency over the athlete's full history
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown athlete, or whatever the store reports
    pub async fn activity_frequency(&self, athlete_id: AthleteId) -> AppResult<Vec<ActivityStat>> {
        let sessions = self.athlete_sessions(athlete_id, &SessionFilter::all()).await?;
        Ok(FrequencyAnalyzer::analyze(&sessions))
    }

    /// Progress series over a trailing month window
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown athlete, `ValueOutOfRange` for a bad
    /// `months`, or whatever the store reports
    pub async fn progress_metrics(
        &self,
        athlete_id: AthleteId,
        months: Option<u32>,
    ) -> AppResult<Vec<MonthlyProgress>> {
        let window = TrailingWindow::months(months.unwrap_or(self.windows.progress_months))?;
        let today = self.clock.today();
        let sessions = self.athlete_sessions(athlete_id, &window.filter(today)).await?;
        Ok(ProgressCalculator::calculate(&sessions, window, today))
    }

    /// Suggestions from the athlete's dominant activity
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown athlete, or whatever the store reports
    pub async fn recommendations(&self, athlete_id: AthleteId) -> AppResult<RecommendationSet> {
        let activities = self.activity_frequency(athlete_id).await?;
        Ok(RecommendationEngine::recommend(activities))
    }

    /// All four per-athlete analyses from a single scan
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown athlete, or whatever the store reports
    pub async fn bundle(&self, athlete_id: AthleteId) -> AppResult<AnalyticsBundle> {
        let sessions = self.athlete_sessions(athlete_id, &SessionFilter::all()).await?;
        let today = self.clock.today();

        let weekly = TimeWindowAggregator::weekly_totals(
            &sessions,
            TrailingWindow::Weeks(self.windows.weekly_weeks),
            today,
        );
        let progress = ProgressCalculator::calculate(
            &sessions,
            TrailingWindow::Months(self.windows.progress_months),
            today,
        );
        let activities = FrequencyAnalyzer::analyze(&sessions);
        let recommendations = RecommendationEngine::recommend(activities.clone());

        info!(
            athlete_id = %athlete_id,
            sessions = sessions.len(),
            weekly_buckets = weekly.len(),
            progress_points = progress.len(),
            "Built analytics bundle"
        );

        Ok(AnalyticsBundle {
            weekly,
            activities,
            progress,
            recommendations,
        })
    }

    /// Store-wide dashboard figures
    ///
    /// # Errors
    ///
    /// Whatever the store reports
    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        DashboardSummarizer::summarize(self.store.as_ref(), self.clock.today()).await
    }

    async fn require_athlete(&self, athlete_id: AthleteId) -> AppResult<Athlete> {
        match self.store.get_athlete(athlete_id).await? {
            Some(athlete) => Ok(athlete),
            None => {
                warn!(athlete_id = %athlete_id, "Analytics requested for unknown athlete");
                Err(AppError::not_found(format!("Athlete {athlete_id}"))
                    .with_resource_id(athlete_id.to_string()))
            }
        }
    }

    async fn athlete_sessions(
        &self,
        athlete_id: AthleteId,
        filter: &SessionFilter,
    ) -> AppResult<Vec<TrainingSession>> {
        self.require_athlete(athlete_id).await?;
        self.store.list_sessions_by_athlete(athlete_id, filter).await
    }
}
