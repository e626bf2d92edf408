// ABOUTME: Training analytics engine for the trainlog platform
// ABOUTME: Turns raw session collections into time buckets, frequency, progress and suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

#![deny(unsafe_code)]

//! # Trainlog Intelligence
//!
//! Stateless aggregation over a [`trainlog_core::store::SessionStore`]. The pure
//! analyzers take a slice of sessions plus a reference date; [`AnalyticsFacade`]
//! wires them to a store and an injected [`Clock`].
//!
//! Null-duration policy, applied uniformly: an absent duration adds nothing to a
//! sum and is left out of the denominator of an average.

/// Injected reference time
pub mod clock;
/// Store-wide dashboard figures
pub mod dashboard;
/// Per-athlete composition of the analyzers
pub mod facade;
/// Activity frequency distribution
pub mod frequency;
/// Monthly progress series
pub mod progress;
/// Dominant-activity suggestions
pub mod recommendation_engine;
/// Weekly and monthly training-time buckets
pub mod time_window;
/// Trailing windows and calendar bucket keys
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{DashboardSummarizer, DashboardSummary};
pub use facade::{AnalyticsBundle, AnalyticsFacade, AnalyticsWindows};
pub use frequency::{ActivityStat, FrequencyAnalyzer};
pub use progress::{MonthlyProgress, ProgressCalculator};
pub use recommendation_engine::{RecommendationEngine, RecommendationSet, TrainingFocus};
pub use time_window::{MonthlyBucket, TimeWindowAggregator, WeeklyBucket};
pub use window::TrailingWindow;
