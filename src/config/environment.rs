// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, database URL, CORS origin and analytics windows from the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! Environment-based configuration
//!
//! There is no configuration file. Every setting has a default and can be
//! overridden by one environment variable.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use trainlog_core::constants::{analytics, defaults, env_config};
use trainlog_core::errors::{AppError, AppResult, ErrorCode};
use trainlog_intelligence::{AnalyticsWindows, TrailingWindow};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where the session store lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite`, lost on exit
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL; a bare path is treated as a `SQLite` file
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an empty URL or a non-`SQLite` scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "DATABASE_URL must not be empty",
            ));
        }
        if s.contains("://") && !s.starts_with("sqlite://") {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unsupported database URL '{s}': only SQLite is supported"),
            ));
        }

        let path = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        if path == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path),
            })
        }
    }

    /// Connection string understood by `sqlx`
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/trainlog.db"),
        }
    }
}

/// Session store settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatabaseConfig {
    /// Store location
    pub url: DatabaseUrl,
}

/// Cross-origin settings for the browser frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Single allowed origin, or `*` for any
    pub allowed_origin: String,
}

/// Default analytics window widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Weekly training-time window, in weeks
    pub weekly_window_weeks: u32,
    /// Progress window, in months
    pub progress_window_months: u32,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            weekly_window_weeks: analytics::DEFAULT_WEEKLY_WINDOW_WEEKS,
            progress_window_months: analytics::DEFAULT_PROGRESS_WINDOW_MONTHS,
        }
    }
}

impl AnalyticsConfig {
    /// Window set handed to the analytics facade
    #[must_use]
    pub fn windows(&self) -> AnalyticsWindows {
        AnalyticsWindows {
            weekly_weeks: self.weekly_window_weeks,
            progress_months: self.progress_window_months,
            ..AnalyticsWindows::default()
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Session store
    pub database: DatabaseConfig,
    /// CORS
    pub cors: CorsConfig,
    /// Analytics windows
    pub analytics: AnalyticsConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            database: DatabaseConfig::default(),
            cors: CorsConfig {
                allowed_origin: defaults::CORS_ALLOWED_ORIGIN.to_owned(),
            },
            analytics: AnalyticsConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable is set but cannot be parsed, or when
    /// an analytics window is outside its accepted range
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_env(env_config::HTTP_PORT, defaults::HTTP_PORT)?,
            host: env_var_or(env_config::HOST, defaults::HOST),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_config::DATABASE_URL,
                    defaults::DATABASE_URL,
                ))?,
            },
            cors: CorsConfig {
                allowed_origin: env_var_or(
                    env_config::CORS_ALLOWED_ORIGIN,
                    defaults::CORS_ALLOWED_ORIGIN,
                ),
            },
            analytics: AnalyticsConfig {
                weekly_window_weeks: parse_env(
                    env_config::WEEKLY_WINDOW_WEEKS,
                    analytics::DEFAULT_WEEKLY_WINDOW_WEEKS,
                )?,
                progress_window_months: parse_env(
                    env_config::PROGRESS_WINDOW_MONTHS,
                    analytics::DEFAULT_PROGRESS_WINDOW_MONTHS,
                )?,
            },
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field rules
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a window is out of range or the host is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::new(ErrorCode::ConfigInvalid, "HOST must not be empty"));
        }
        TrailingWindow::weeks(self.analytics.weekly_window_weeks)
            .and_then(|_| TrailingWindow::months(self.analytics.progress_window_months))
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("Invalid analytics window: {}", e.message),
                )
            })?;
        Ok(())
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trainlog Server Configuration:\n\
             - Environment: {}\n\
             - Listen: {}\n\
             - Database: {}\n\
             - CORS Origin: {}\n\
             - Weekly Window: {} weeks\n\
             - Progress Window: {} months",
            self.environment,
            self.bind_address(),
            self.database.url.to_connection_string(),
            self.cors.allowed_origin,
            self.analytics.weekly_window_weeks,
            self.analytics.progress_window_months,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Invalid {key} value '{raw}': {e}"),
            )
        }),
        Err(_) => Ok(default),
    }
}
