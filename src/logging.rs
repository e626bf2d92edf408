// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Builds the tracing subscriber with env filter, noise reduction and json/pretty/compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! Structured logging with `tracing`

use anyhow::Result;
use std::env;
use std::fmt as std_fmt;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use trainlog_core::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Emit span open and close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for production
    Json,
    /// Multi-line human output for development
    Pretty,
    /// One line per event
    Compact,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`; anything unknown is pretty
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: service_names::TRAINLOG_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        let format = env::var("LOG_FORMAT").map_or_else(
            |_| {
                if is_production {
                    LogFormat::Json
                } else {
                    LogFormat::Pretty
                }
            },
            |raw| LogFormat::from_str_or_default(&raw),
        );

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::TRAINLOG_SERVER.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Filter built from the configured level plus fixed noise reduction
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let directives = [
            ("hyper=warn", Level::WARN),
            ("hyper::proto=warn", Level::WARN),
            ("sqlx=warn", Level::WARN),
            ("sqlx::query=warn", Level::WARN),
            ("tower_http=info", Level::INFO),
        ];

        let filter = directives
            .into_iter()
            .fold(EnvFilter::new(&self.level), |filter, (directive, fallback)| {
                filter.add_directive(directive.parse().unwrap_or_else(|_| fallback.into()))
            });

        // Keep our own crates at the requested level even when RUST_LOG is a bare level
        if self.level.contains('=') {
            filter
        } else {
            ["trainlog_server", "trainlog_intelligence", "trainlog_core"]
                .into_iter()
                .fold(filter, |filter, target| {
                    filter.add_directive(
                        format!("{target}={}", self.level)
                            .parse()
                            .unwrap_or_else(|_| Level::INFO.into()),
                    )
                })
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = %self.format,
            "Trainlog server starting up"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
