// ABOUTME: Core data models for the trainlog platform
// ABOUTME: Re-exports Athlete, TrainingSession, identifiers and write payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! # Data Models
//!
//! - `Athlete`: a person whose training is being tracked
//! - `TrainingSession`: one logged session, owned by exactly one athlete
//! - `SessionWithAthlete`: a session joined with its athlete's name for listings
//! - `NewAthlete` / `NewSession`: write payloads accepted by the store

mod athlete;
mod ids;
mod session;

pub use athlete::{Athlete, NewAthlete};
pub use ids::{AthleteId, SessionId};
pub use session::{
    NewSession, SessionFilter, SessionWithAthlete, TrainingSession, TrainingSessionBuilder,
};
