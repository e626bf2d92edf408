// ABOUTME: Training session models including TrainingSession and its builder
// ABOUTME: Write payload, the athlete-joined listing row, and date-range scan filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::athlete::non_blank;
use super::{AthleteId, SessionId};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged training session
///
/// `duration_minutes` and `score` stay optional all the way through the
/// analytics layer; they are never coerced to zero on read.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use trainlog_core::models::{AthleteId, SessionId, TrainingSessionBuilder};
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// let session = TrainingSessionBuilder::new(SessionId::new(1), AthleteId::new(7), date, "Running")
///     .duration_minutes(45)
///     .score(8.5)
///     .build();
///
/// assert_eq!(session.activity_type, "Running");
/// assert_eq!(session.duration_minutes, Some(45));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Store identifier
    pub id: SessionId,
    /// Owning athlete
    pub athlete_id: AthleteId,
    /// Calendar date the session took place
    pub date: NaiveDate,
    /// Free-form activity label, e.g. "Running" or "Gym"
    pub activity_type: String,
    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: Option<u32>,
    /// Repetition count
    pub repetitions: Option<u32>,
    /// Performance score
    pub score: Option<f64>,
    /// Free text notes
    pub notes: Option<String>,
}

impl TrainingSession {
    /// Duration as a summand: absent durations contribute nothing
    #[must_use]
    pub fn duration_or_zero(&self) -> u64 {
        self.duration_minutes.map_or(0, u64::from)
    }
}

/// Builder for [`TrainingSession`], mostly used by tests and fixtures
#[derive(Debug, Clone)]
pub struct TrainingSessionBuilder {
    session: TrainingSession,
}

impl TrainingSessionBuilder {
    /// Start a session with the required fields
    #[must_use]
    pub fn new(
        id: SessionId,
        athlete_id: AthleteId,
        date: NaiveDate,
        activity_type: impl Into<String>,
    ) -> Self {
        Self {
            session: TrainingSession {
                id,
                athlete_id,
                date,
                activity_type: activity_type.into(),
                duration_minutes: None,
                repetitions: None,
                score: None,
                notes: None,
            },
        }
    }

    /// Set the duration in minutes
    #[must_use]
    pub const fn duration_minutes(mut self, minutes: u32) -> Self {
        self.session.duration_minutes = Some(minutes);
        self
    }

    /// Set the repetition count
    #[must_use]
    pub const fn repetitions(mut self, repetitions: u32) -> Self {
        self.session.repetitions = Some(repetitions);
        self
    }

    /// Set the score
    #[must_use]
    pub const fn score(mut self, score: f64) -> Self {
        self.session.score = Some(score);
        self
    }

    /// Set the notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.session.notes = Some(notes.into());
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> TrainingSession {
        self.session
    }
}

/// A session joined with its athlete's display name, for listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionWithAthlete {
    /// The session itself
    #[serde(flatten)]
    pub session: TrainingSession,
    /// Name of the owning athlete
    pub athlete_name: String,
}

/// Payload for creating or replacing a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    /// Owning athlete
    pub athlete_id: AthleteId,
    /// Calendar date
    pub date: NaiveDate,
    /// Activity label
    pub activity_type: String,
    /// Duration in minutes
    #[serde(default, rename = "duration")]
    pub duration_minutes: Option<u32>,
    /// Repetition count
    #[serde(default)]
    pub repetitions: Option<u32>,
    /// Performance score
    #[serde(default)]
    pub score: Option<f64>,
    /// Free text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewSession {
    /// Create a payload with only the required fields set
    #[must_use]
    pub fn new(athlete_id: AthleteId, date: NaiveDate, activity_type: impl Into<String>) -> Self {
        Self {
            athlete_id,
            date,
            activity_type: activity_type.into(),
            duration_minutes: None,
            repetitions: None,
            score: None,
            notes: None,
        }
    }

    /// Set the duration in minutes
    #[must_use]
    pub const fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Set the score
    #[must_use]
    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Trim the activity label and notes
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the activity label is blank, and
    /// `InvalidInput` when the score is not a finite number
    pub fn normalized(self) -> AppResult<Self> {
        let activity_type = self.activity_type.trim().to_owned();
        if activity_type.is_empty() {
            return Err(AppError::missing_field("Activity type"));
        }
        if self.score.is_some_and(|s| !s.is_finite()) {
            return Err(AppError::invalid_input("Score must be a finite number"));
        }
        Ok(Self {
            activity_type,
            notes: non_blank(self.notes),
            ..self
        })
    }
}

/// Inclusive date range applied by store scans; both ends optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Earliest date kept
    pub from: Option<NaiveDate>,
    /// Latest date kept
    pub to: Option<NaiveDate>,
}

impl SessionFilter {
    /// Filter that keeps everything
    #[must_use]
    pub const fn all() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Filter for `[from, to]`
    #[must_use]
    pub const fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Whether `date` falls within the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let filter = SessionFilter::between(day(2), day(4));
        assert!(!filter.contains(day(1)));
        assert!(filter.contains(day(2)));
        assert!(filter.contains(day(4)));
        assert!(!filter.contains(day(5)));
        assert!(SessionFilter::all().contains(day(30)));
    }

    #[test]
    fn test_session_json_uses_duration_field_name() {
        let session = TrainingSessionBuilder::new(SessionId::new(3), AthleteId::new(1), day(1), "Gym")
            .duration_minutes(60)
            .build();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["duration"], 60);
        assert_eq!(json["date"], "2025-06-01");
        assert!(json["score"].is_null());
    }

    #[test]
    fn test_blank_activity_type_is_rejected() {
        let payload = NewSession::new(AthleteId::new(1), day(1), "  ");
        assert!(payload.normalized().is_err());
    }
}
