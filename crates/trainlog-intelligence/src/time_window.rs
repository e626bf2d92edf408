// ABOUTME: Calendar bucketing of training time over trailing windows
// ABOUTME: Sums session minutes per ISO week or per month, most recent bucket first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::window::{iso_week_key, month_key, TrailingWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use trainlog_core::models::TrainingSession;

/// Training minutes in one ISO week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    /// ISO week number, 1 to 53
    pub week_number: u32,
    /// ISO week-year, which differs from the calendar year around New Year
    pub year: i32,
    /// Sum of session durations, absent durations counting as zero
    pub total_minutes: u64,
}

impl WeeklyBucket {
    /// Display label `(year, week_number)`
    #[must_use]
    pub fn label(&self) -> String {
        format!("({}, {})", self.year, self.week_number)
    }
}

/// Training minutes in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// `YYYY-MM`
    pub month: String,
    /// Sum of session durations, absent durations counting as zero
    pub total_minutes: u64,
}

/// Groups sessions into calendar buckets inside a trailing window
///
/// Output is sparse: a bucket with no sessions in the window is left out rather
/// than reported as zero.
pub struct TimeWindowAggregator;

impl TimeWindowAggregator {
    /// Minutes per ISO week, newest week first
    #[must_use]
    pub fn weekly_totals(
        sessions: &[TrainingSession],
        window: TrailingWindow,
        today: NaiveDate,
    ) -> Vec<WeeklyBucket> {
        let buckets: Vec<WeeklyBucket> = Self::totals_by(sessions, window, today, iso_week_key)
            .into_iter()
            .map(|((year, week_number), total_minutes)| WeeklyBucket {
                week_number,
                year,
                total_minutes,
            })
            .collect();

        debug!(
            sessions = sessions.len(),
            buckets = buckets.len(),
            ?window,
            "Aggregated weekly training time"
        );
        buckets
    }

    /// Minutes per calendar month, newest month first
    #[must_use]
    pub fn monthly_totals(
        sessions: &[TrainingSession],
        window: TrailingWindow,
        today: NaiveDate,
    ) -> Vec<MonthlyBucket> {
        let buckets: Vec<MonthlyBucket> = Self::totals_by(sessions, window, today, month_key)
            .into_iter()
            .map(|((year, month), total_minutes)| MonthlyBucket {
                month: format!("{year:04}-{month:02}"),
                total_minutes,
            })
            .collect();

        debug!(
            sessions = sessions.len(),
            buckets = buckets.len(),
            ?window,
            "Aggregated monthly training time"
        );
        buckets
    }

    fn totals_by<K, F>(
        sessions: &[TrainingSession],
        window: TrailingWindow,
        today: NaiveDate,
        key_of: F,
    ) -> Vec<(K, u64)>
    where
        K: Ord,
        F: Fn(NaiveDate) -> K,
    {
        let mut totals: BTreeMap<K, u64> = BTreeMap::new();
        for session in sessions
            .iter()
            .filter(|s| window.contains(today, s.date))
        {
            *totals.entry(key_of(session.date)).or_insert(0) += session.duration_or_zero();
        }
        totals.into_iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trainlog_core::models::{AthleteId, SessionId, TrainingSessionBuilder};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(id: i64, date: NaiveDate, minutes: Option<u32>) -> TrainingSession {
        let builder = TrainingSessionBuilder::new(SessionId::new(id), AthleteId::new(1), date, "Running");
        match minutes {
            Some(m) => builder.duration_minutes(m).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn test_weekly_totals_are_sparse_and_newest_first() {
        let today = ymd(2025, 3, 12);
        let sessions = vec![
            session(1, ymd(2025, 3, 11), Some(30)),
            session(2, ymd(2025, 3, 10), Some(20)),
            // two weeks earlier, the week in between is empty
            session(3, ymd(2025, 2, 25), Some(45)),
            session(4, ymd(2025, 2, 24), None),
        ];

        let buckets =
            TimeWindowAggregator::weekly_totals(&sessions, TrailingWindow::Weeks(8), today);

        assert_eq!(
            buckets,
            vec![
                WeeklyBucket { week_number: 11, year: 2025, total_minutes: 50 },
                WeeklyBucket { week_number: 9, year: 2025, total_minutes: 45 },
            ]
        );
        assert_eq!(buckets[0].label(), "(2025, 11)");
    }

    #[test]
    fn test_sessions_outside_window_are_dropped() {
        let today = ymd(2025, 3, 12);
        let sessions = vec![
            session(1, ymd(2025, 3, 13), Some(99)),
            session(2, ymd(2024, 1, 1), Some(99)),
            session(3, ymd(2025, 3, 12), Some(10)),
        ];

        let weekly = TimeWindowAggregator::weekly_totals(&sessions, TrailingWindow::Weeks(2), today);
        assert_eq!(weekly.iter().map(|b| b.total_minutes).sum::<u64>(), 10);

        let monthly =
            TimeWindowAggregator::monthly_totals(&sessions, TrailingWindow::Months(6), today);
        assert_eq!(
            monthly,
            vec![MonthlyBucket { month: "2025-03".to_owned(), total_minutes: 10 }]
        );
    }

    #[test]
    fn test_year_boundary_uses_iso_week_year() {
        let today = ymd(2025, 1, 2);
        let sessions = vec![
            session(1, ymd(2024, 12, 31), Some(15)),
            session(2, ymd(2024, 12, 29), Some(25)),
        ];

        let buckets = TimeWindowAggregator::weekly_totals(&sessions, TrailingWindow::Weeks(1), today);

        assert_eq!(
            buckets,
            vec![
                WeeklyBucket { week_number: 1, year: 2025, total_minutes: 15 },
                WeeklyBucket { week_number: 52, year: 2024, total_minutes: 25 },
            ]
        );
    }

    #[test]
    fn test_monthly_totals_group_by_calendar_month() {
        let today = ymd(2025, 3, 31);
        let sessions = vec![
            session(1, ymd(2025, 3, 1), Some(10)),
            session(2, ymd(2025, 2, 28), Some(20)),
            session(3, ymd(2025, 2, 1), Some(30)),
        ];

        let buckets = TimeWindowAggregator::monthly_totals(&sessions, TrailingWindow::Months(2), today);

        assert_eq!(buckets[0].month, "2025-03");
        assert_eq!(buckets[1], MonthlyBucket { month: "2025-02".to_owned(), total_minutes: 50 });
    }
}
