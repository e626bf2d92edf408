// ABOUTME: Injected reference time for trailing-window calculations
// ABOUTME: Clock trait with a system implementation and a fixed one for tests and replays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// Source of "now" for every window computation
///
/// Analytics never reads ambient system time directly; callers hand in a clock.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in UTC
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze at `at`
    #[must_use]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Freeze at noon UTC on `date`
    #[must_use]
    pub fn on_date(date: NaiveDate) -> Self {
        Self {
            at: date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(12),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
