// ABOUTME: Athlete profile model owned by the session store
// ABOUTME: Athlete read model and the NewAthlete write payload with its validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::AthleteId;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an athlete as stored
///
/// Analytics code reads athletes but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    /// Store identifier
    pub id: AthleteId,
    /// Display name (never empty)
    pub name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Main sport, free-form
    pub sport: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing an athlete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAthlete {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Main sport
    #[serde(default)]
    pub sport: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone
    #[serde(default)]
    pub phone: Option<String>,
}

impl NewAthlete {
    /// Create a payload with only the required name set
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Trim text fields and turn blank optionals into `None`
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the name is blank
    pub fn normalized(self) -> AppResult<Self> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::missing_field("Name"));
        }
        Ok(Self {
            name,
            age: self.age,
            sport: non_blank(self.sport),
            email: non_blank(self.email),
            phone: non_blank(self.phone),
        })
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
