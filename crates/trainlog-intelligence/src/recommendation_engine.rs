// ABOUTME: Rule-table training suggestions keyed on the athlete's dominant activity
// ABOUTME: Ordered case-insensitive label matching with a balanced-routine fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::frequency::{ActivityStat, FrequencyAnalyzer};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::constants::recommendations::{
    BALANCED_ROUTINE, CRICKET_SHOULDER, CRICKET_SPRINT, GYM_CARDIO, GYM_RECOVERY,
    RUN_FLEXIBILITY, RUN_STRENGTH,
};

/// Broad training category a label is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    /// Label mentions "run"
    Running,
    /// Label mentions "gym"
    Gym,
    /// Label mentions "cricket"
    Cricket,
    /// No rule matched
    General,
}

struct Rule {
    keyword: &'static str,
    focus: TrainingFocus,
    suggestions: &'static [&'static str],
}

/// Evaluated top to bottom, first match wins
const RULES: &[Rule] = &[
    Rule {
        keyword: "run",
        focus: TrainingFocus::Running,
        suggestions: &[RUN_STRENGTH, RUN_FLEXIBILITY],
    },
    Rule {
        keyword: "gym",
        focus: TrainingFocus::Gym,
        suggestions: &[GYM_CARDIO, GYM_RECOVERY],
    },
    Rule {
        keyword: "cricket",
        focus: TrainingFocus::Cricket,
        suggestions: &[CRICKET_SPRINT, CRICKET_SHOULDER],
    },
];

const FALLBACK: &[&str] = &[BALANCED_ROUTINE];

/// Suggestions together with the distribution they came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Frequency-ordered activity list
    pub activities: Vec<ActivityStat>,
    /// Suggestion texts, empty when there are no activities
    pub recommendations: Vec<String>,
}

/// Maps the dominant activity to fixed suggestion texts
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Classify an activity label; total over all strings
    #[must_use]
    pub fn classify(activity_type: &str) -> TrainingFocus {
        let label = activity_type.to_lowercase();
        RULES
            .iter()
            .find(|rule| label.contains(rule.keyword))
            .map_or(TrainingFocus::General, |rule| rule.focus)
    }

    /// Suggestion texts for a focus
    #[must_use]
    pub fn suggestions_for(focus: TrainingFocus) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|rule| rule.focus == focus)
            .map_or(FALLBACK, |rule| rule.suggestions)
    }

    /// Recommend from a frequency-ordered list as produced by [`FrequencyAnalyzer`]
    #[must_use]
    pub fn recommend(activities: Vec<ActivityStat>) -> RecommendationSet {
        let recommendations = FrequencyAnalyzer::dominant(&activities).map_or_else(Vec::new, |top| {
            let focus = Self::classify(&top.activity_type);
            debug!(activity_type = %top.activity_type, ?focus, "Selected recommendation rule");
            Self::suggestions_for(focus)
                .iter()
                .map(|text| (*text).to_owned())
                .collect()
        });

        RecommendationSet {
            activities,
            recommendations,
        }
    }
}
