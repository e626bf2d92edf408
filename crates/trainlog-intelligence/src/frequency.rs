// ABOUTME: Activity-type frequency distribution for one athlete
// ABOUTME: Counts sessions and sums minutes per activity label, most frequent first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use trainlog_core::models::TrainingSession;

/// Session count and total minutes for one activity label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStat {
    /// Activity label exactly as stored
    pub activity_type: String,
    /// Number of sessions with this label
    pub frequency: u64,
    /// Sum of durations, absent durations counting as zero
    pub total_duration: u64,
}

/// Groups sessions by activity label
pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    /// Frequency distribution ordered by descending count
    ///
    /// Labels are compared case-sensitively. Equal counts keep the order in which
    /// each label was first seen in `sessions`, so the dominant activity is
    /// reproducible for a given scan order.
    #[must_use]
    pub fn analyze(sessions: &[TrainingSession]) -> Vec<ActivityStat> {
        let mut stats: Vec<ActivityStat> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for session in sessions {
            let slot = *index
                .entry(session.activity_type.as_str())
                .or_insert_with(|| {
                    stats.push(ActivityStat {
                        activity_type: session.activity_type.clone(),
                        frequency: 0,
                        total_duration: 0,
                    });
                    stats.len() - 1
                });
            let stat = &mut stats[slot];
            stat.frequency += 1;
            stat.total_duration += session.duration_or_zero();
        }

        // sort_by is stable: first-seen order survives among equal counts
        stats.sort_by(|a, b| b.frequency.cmp(&a.frequency));

        debug!(
            sessions = sessions.len(),
            activity_types = stats.len(),
            "Computed activity frequency"
        );
        stats
    }

    /// The most frequent activity, if there is any session at all
    #[must_use]
    pub fn dominant(stats: &[ActivityStat]) -> Option<&ActivityStat> {
        stats.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trainlog_core::models::{AthleteId, SessionId, TrainingSessionBuilder};

    fn session(id: i64, activity: &str, minutes: Option<u32>) -> TrainingSession {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let builder = TrainingSessionBuilder::new(SessionId::new(id), AthleteId::new(1), date, activity);
        match minutes {
            Some(m) => builder.duration_minutes(m).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn test_running_outranks_gym() {
        let sessions = vec![
            session(1, "Running", Some(30)),
            session(2, "Running", Some(45)),
            session(3, "Gym", Some(60)),
        ];

        let stats = FrequencyAnalyzer::analyze(&sessions);

        assert_eq!(
            stats,
            vec![
                ActivityStat { activity_type: "Running".to_owned(), frequency: 2, total_duration: 75 },
                ActivityStat { activity_type: "Gym".to_owned(), frequency: 1, total_duration: 60 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let sessions = vec![
            session(1, "Yoga", None),
            session(2, "Cricket", Some(90)),
            session(3, "Cricket", Some(90)),
            session(4, "Yoga", Some(20)),
            session(5, "Swim", Some(40)),
        ];

        let labels: Vec<String> = FrequencyAnalyzer::analyze(&sessions)
            .into_iter()
            .map(|s| s.activity_type)
            .collect();

        assert_eq!(labels, ["Yoga", "Cricket", "Swim"]);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let sessions = vec![session(1, "gym", Some(10)), session(2, "Gym", Some(10))];
        assert_eq!(FrequencyAnalyzer::analyze(&sessions).len(), 2);
    }

    #[test]
    fn test_empty_history_has_no_dominant_activity() {
        let stats = FrequencyAnalyzer::analyze(&[]);
        assert!(stats.is_empty());
        assert!(FrequencyAnalyzer::dominant(&stats).is_none());
    }
}
