// ABOUTME: Core types for the trainlog athlete training platform
// ABOUTME: Foundation crate with error handling, domain models, the store interface, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

#![deny(unsafe_code)]

//! # Trainlog Core
//!
//! Foundation crate shared by the analytics engine and the server. It changes
//! rarely, which keeps incremental builds of the rest of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and storage errors
//! - **models**: Athletes, training sessions, identifiers and write payloads
//! - **store**: The `SessionStore` trait the analytics engine reads through
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Athlete, `TrainingSession`, identifiers)
pub mod models;

/// Session store read interface
pub mod store;
