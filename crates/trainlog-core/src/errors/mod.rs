// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Defines ErrorCode, AppError, AppResult and the failure envelope sent to clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Errors carry an
//! [`ErrorCode`] that decides the HTTP status at the transport boundary, so storage
//! and analytics code never deal with status codes directly.

/// Storage-level error types
pub mod database;

#[cfg(feature = "http-response")]
use axum::{
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "http-response")]
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request input is malformed
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent or empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric parameter is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// The referenced athlete or session does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// The session store did not respond
    #[serde(rename = "STORE_UNAVAILABLE")]
    StoreUnavailable = 4003,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// The store answered but the query failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// JSON encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::StoreUnavailable => 503,
            Self::ConfigError
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::DatabaseError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::StoreUnavailable => "The session store is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Identifier of the resource involved, when there is one
    pub resource_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            resource_id: None,
            source: None,
        }
    }

    /// Attach the identifier of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field missing or empty
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
    }

    /// Parameter outside its accepted range
    #[must_use]
    pub fn out_of_range(parameter: &str, min: u32, max: u32, actual: u32) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{parameter} must be between {min} and {max}, got {actual}"),
        )
    }

    /// Session store did not respond
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Database error
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Failure envelope returned to clients: `{success: false, message, code}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Machine-readable code
    pub code: ErrorCode,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            success: false,
            message: error.message.clone(),
            code: error.code,
        }
    }
}

#[cfg(feature = "http-response")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self, "Request failed");
        } else {
            tracing::debug!(code = ?self.code, error = %self, "Request rejected");
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
