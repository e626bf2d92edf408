// ABOUTME: HTTP route modules and the shared JSON response envelope
// ABOUTME: Success bodies are {success, data, message}; failures come from AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! Route handlers grouped by resource
//!
//! Each group exposes a `routes(resources) -> Router` constructor; the server
//! merges them into one router.

/// Analytics endpoints
pub mod analytics;
/// Athlete CRUD
pub mod athletes;
/// Banner, liveness and readiness
pub mod health;
/// Training session CRUD
pub mod sessions;

pub use analytics::AnalyticsRoutes;
pub use athletes::AthleteRoutes;
pub use health::HealthRoutes;
pub use sessions::SessionRoutes;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use trainlog_core::errors::{AppError, AppResult};

/// Success envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Confirmation text for writes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Envelope around `data`
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Envelope around `data` with a confirmation message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Unwrap a JSON body, turning axum's rejection into an `InvalidInput` envelope
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Unwrap query parameters the same way
fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}

/// Parse an identifier path segment
fn parse_id<T>(raw: &str) -> AppResult<T>
where
    T: FromStr<Err = AppError>,
{
    raw.parse()
}
