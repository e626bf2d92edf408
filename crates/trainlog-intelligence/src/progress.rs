// ABOUTME: Month-by-activity progress series over a trailing window
// ABOUTME: Average duration, average score and session count per (month, activity type)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

#![allow(clippy::cast_precision_loss)] // Safe: session counts and minute sums stay far below 2^52

use crate::window::{month_key, month_label, TrailingWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use trainlog_core::models::TrainingSession;

/// One point of an athlete's progress series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProgress {
    /// `YYYY-MM`
    pub month: String,
    /// Activity label as stored
    pub activity_type: String,
    /// Mean of the present durations; `None` when every duration is absent
    pub avg_duration: Option<f64>,
    /// Mean of the present scores; `None` when every score is absent
    pub avg_score: Option<f64>,
    /// Sessions in the group, whether or not they carry a duration or score
    pub session_count: u64,
}

#[derive(Debug, Default)]
struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    fn add(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.sum += value;
            self.count += 1;
        }
    }

    fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

struct Group {
    month: (i32, u32),
    label: String,
    activity_type: String,
    duration: Mean,
    score: Mean,
    session_count: u64,
}

/// Builds the per-month, per-activity progress series
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Progress series ordered by month descending
    ///
    /// Within one month, activity types appear in the order they were first seen
    /// in `sessions`. Groups only exist for months that had at least one session.
    #[must_use]
    pub fn calculate(
        sessions: &[TrainingSession],
        window: TrailingWindow,
        today: NaiveDate,
    ) -> Vec<MonthlyProgress> {
        let mut groups: Vec<Group> = Vec::new();
        let mut index: HashMap<((i32, u32), &str), usize> = HashMap::new();

        for session in sessions
            .iter()
            .filter(|s| window.contains(today, s.date))
        {
            let month = month_key(session.date);
            let slot = *index
                .entry((month, session.activity_type.as_str()))
                .or_insert_with(|| {
                    groups.push(Group {
                        month,
                        label: month_label(session.date),
                        activity_type: session.activity_type.clone(),
                        duration: Mean::default(),
                        score: Mean::default(),
                        session_count: 0,
                    });
                    groups.len() - 1
                });

            let group = &mut groups[slot];
            group.duration.add(session.duration_minutes.map(f64::from));
            group.score.add(session.score);
            group.session_count += 1;
        }

        groups.sort_by(|a, b| b.month.cmp(&a.month));

        let series: Vec<MonthlyProgress> = groups
            .into_iter()
            .map(|group| MonthlyProgress {
                avg_duration: group.duration.value(),
                avg_score: group.score.value(),
                month: group.label,
                activity_type: group.activity_type,
                session_count: group.session_count,
            })
            .collect();

        debug!(
            sessions = sessions.len(),
            points = series.len(),
            ?window,
            "Computed progress series"
        );
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainlog_core::models::{AthleteId, SessionId, TrainingSessionBuilder};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(
        id: i64,
        date: NaiveDate,
        activity: &str,
        minutes: Option<u32>,
        score: Option<f64>,
    ) -> TrainingSession {
        let mut builder =
            TrainingSessionBuilder::new(SessionId::new(id), AthleteId::new(1), date, activity);
        if let Some(m) = minutes {
            builder = builder.duration_minutes(m);
        }
        if let Some(s) = score {
            builder = builder.score(s);
        }
        builder.build()
    }

    #[test]
    fn test_averages_ignore_absent_values() {
        let today = ymd(2025, 4, 20);
        let sessions = vec![
            session(1, ymd(2025, 4, 10), "Running", Some(30), Some(8.0)),
            session(2, ymd(2025, 4, 5), "Running", None, None),
            session(3, ymd(2025, 4, 2), "Running", Some(50), Some(6.0)),
        ];

        let series = ProgressCalculator::calculate(&sessions, TrailingWindow::Months(6), today);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month, "2025-04");
        assert_eq!(series[0].avg_duration, Some(40.0));
        assert_eq!(series[0].avg_score, Some(7.0));
        assert_eq!(series[0].session_count, 3);
    }

    #[test]
    fn test_only_null_scores_report_none() {
        let today = ymd(2025, 4, 20);
        let sessions = vec![session(1, ymd(2025, 4, 1), "Gym", Some(60), None)];

        let series = ProgressCalculator::calculate(&sessions, TrailingWindow::Months(6), today);

        assert_eq!(series[0].avg_score, None);
        assert_eq!(series[0].avg_duration, Some(60.0));
    }

    #[test]
    fn test_months_descend_and_types_keep_scan_order() {
        let today = ymd(2025, 4, 20);
        let sessions = vec![
            session(1, ymd(2025, 4, 18), "Gym", Some(60), None),
            session(2, ymd(2025, 3, 30), "Cricket", Some(90), Some(7.0)),
            session(3, ymd(2025, 4, 10), "Running", Some(30), None),
            session(4, ymd(2025, 3, 2), "Gym", Some(45), None),
            session(5, ymd(2024, 9, 1), "Gym", Some(45), None),
        ];

        let series = ProgressCalculator::calculate(&sessions, TrailingWindow::Months(6), today);
        let keys: Vec<(&str, &str)> = series
            .iter()
            .map(|p| (p.month.as_str(), p.activity_type.as_str()))
            .collect();

        assert_eq!(
            keys,
            [
                ("2025-04", "Gym"),
                ("2025-04", "Running"),
                ("2025-03", "Cricket"),
                ("2025-03", "Gym"),
            ]
        );
    }
}
