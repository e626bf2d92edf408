// ABOUTME: Application constants organized by domain
// ABOUTME: Analytics windows, recommendation texts, server defaults and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Trailing window sizes and their accepted ranges
pub mod analytics {
    /// Default width of the weekly training-time window
    pub const DEFAULT_WEEKLY_WINDOW_WEEKS: u32 = 8;
    /// Default width of the progress window
    pub const DEFAULT_PROGRESS_WINDOW_MONTHS: u32 = 6;
    /// Default width of the monthly training-time window
    pub const DEFAULT_MONTHLY_WINDOW_MONTHS: u32 = 6;
    /// Smallest accepted window, in either unit
    pub const MIN_WINDOW: u32 = 1;
    /// Largest accepted week window
    pub const MAX_WINDOW_WEEKS: u32 = 52;
    /// Largest accepted month window
    pub const MAX_WINDOW_MONTHS: u32 = 24;
    /// Days per week
    pub const DAYS_PER_WEEK: u32 = 7;
}

/// Fixed suggestion texts used by the recommendation table
pub mod recommendations {
    /// Runner: add strength work
    pub const RUN_STRENGTH: &str = "Consider adding strength training (gym) to prevent injuries";
    /// Runner: add flexibility work
    pub const RUN_FLEXIBILITY: &str = "Add stretching sessions for flexibility";
    /// Gym-goer: add cardio
    pub const GYM_CARDIO: &str = "Include cardio sessions like running for endurance";
    /// Gym-goer: add recovery
    pub const GYM_RECOVERY: &str = "Try yoga for recovery and flexibility";
    /// Cricketer: add sprints
    pub const CRICKET_SPRINT: &str = "Add sprint training to improve speed";
    /// Cricketer: add shoulder work
    pub const CRICKET_SHOULDER: &str = "Include shoulder strengthening exercises";
    /// Anything else
    pub const BALANCED_ROUTINE: &str =
        "Maintain a balanced routine with cardio, strength, and flexibility";
}

/// Server defaults
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;
    /// Default bind host
    pub const HOST: &str = "127.0.0.1";
    /// Default SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/trainlog.db";
    /// Default frontend origin allowed by CORS
    pub const CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";
}

/// Environment variable names read at startup
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind host
    pub const HOST: &str = "HOST";
    /// Database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Allowed CORS origin
    pub const CORS_ALLOWED_ORIGIN: &str = "CORS_ALLOWED_ORIGIN";
    /// Weekly window override
    pub const WEEKLY_WINDOW_WEEKS: &str = "ANALYTICS_WEEKLY_WINDOW_WEEKS";
    /// Progress window override
    pub const PROGRESS_WINDOW_MONTHS: &str = "ANALYTICS_PROGRESS_WINDOW_MONTHS";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in logs and banners
pub mod service_names {
    /// Server service name
    pub const TRAINLOG_SERVER: &str = "trainlog-server";
    /// Banner returned from the root route
    pub const BANNER: &str = "Athlete Training Management API is running";
}
