// ABOUTME: Trailing date windows ending at the reference date
// ABOUTME: Week and month widths, their validation, and the store filter they translate to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use chrono::{Datelike, Days, IsoWeek, Months, NaiveDate};
use trainlog_core::constants::analytics::{
    DAYS_PER_WEEK, MAX_WINDOW_MONTHS, MAX_WINDOW_WEEKS, MIN_WINDOW,
};
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::SessionFilter;

/// A time range that ends at "today" and extends back a whole number of units
///
/// Both ends are inclusive and compared on calendar dates. Anything dated after
/// today is outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingWindow {
    /// `[today - 7n days, today]`
    Weeks(u32),
    /// `[today - n calendar months, today]`
    Months(u32),
}

impl TrailingWindow {
    /// Validated week window
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` unless `1 <= weeks <= 52`
    pub fn weeks(weeks: u32) -> AppResult<Self> {
        if !(MIN_WINDOW..=MAX_WINDOW_WEEKS).contains(&weeks) {
            return Err(AppError::out_of_range(
                "weeks",
                MIN_WINDOW,
                MAX_WINDOW_WEEKS,
                weeks,
            ));
        }
        Ok(Self::Weeks(weeks))
    }

    /// Validated month window
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` unless `1 <= months <= 24`
    pub fn months(months: u32) -> AppResult<Self> {
        if !(MIN_WINDOW..=MAX_WINDOW_MONTHS).contains(&months) {
            return Err(AppError::out_of_range(
                "months",
                MIN_WINDOW,
                MAX_WINDOW_MONTHS,
                months,
            ));
        }
        Ok(Self::Months(months))
    }

    /// First date inside the window
    ///
    /// Month arithmetic clamps to the end of shorter months (March 31 minus one
    /// month is February 28 or 29).
    #[must_use]
    pub fn start(self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Self::Weeks(n) => {
                today.checked_sub_days(Days::new(u64::from(n) * u64::from(DAYS_PER_WEEK)))
            }
            Self::Months(n) => today.checked_sub_months(Months::new(n)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    /// Whether `date` lies in `[start, today]`
    #[must_use]
    pub fn contains(self, today: NaiveDate, date: NaiveDate) -> bool {
        date >= self.start(today) && date <= today
    }

    /// The equivalent store filter, so scans can skip out-of-window rows
    #[must_use]
    pub fn filter(self, today: NaiveDate) -> SessionFilter {
        SessionFilter::between(self.start(today), today)
    }
}

/// `YYYY-MM` label of the month `date` falls in
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Sortable `(year, month)` key of the month `date` falls in
#[must_use]
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Sortable `(iso_year, iso_week)` key of the ISO week `date` falls in
#[must_use]
pub fn iso_week_key(date: NaiveDate) -> (i32, u32) {
    let week: IsoWeek = date.iso_week();
    (week.year(), week.week())
}

/// Monday through Sunday of the ISO week containing `today`
#[must_use]
pub fn current_iso_week(today: NaiveDate) -> SessionFilter {
    let offset = u64::from(today.weekday().num_days_from_monday());
    let monday = today.checked_sub_days(Days::new(offset));
    let sunday = monday.and_then(|m| m.checked_add_days(Days::new(6)));
    match (monday, sunday) {
        (Some(monday), Some(sunday)) => SessionFilter::between(monday, sunday),
        _ => SessionFilter::all(),
    }
}
