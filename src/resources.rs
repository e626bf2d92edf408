// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Holds the database, the analytics facade and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;
use trainlog_core::errors::AppResult;
use trainlog_core::store::SessionStore;
use trainlog_intelligence::{AnalyticsFacade, Clock, SystemClock};

/// Long-lived resources shared across requests
///
/// Nothing in here is locked; concurrent requests each read the store
/// independently.
#[derive(Clone)]
pub struct ServerResources {
    /// CRUD access to athletes and sessions
    pub database: Arc<Database>,
    /// Analytics over the same store
    pub analytics: AnalyticsFacade,
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire resources with the wall clock
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the configured analytics windows are invalid
    pub fn new(database: Database, config: ServerConfig) -> AppResult<Self> {
        Self::with_clock(database, config, Arc::new(SystemClock))
    }

    /// Wire resources with an explicit clock, used by tests to pin "now"
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the configured analytics windows are invalid
    pub fn with_clock(
        database: Database,
        config: ServerConfig,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let database = Arc::new(database);
        let store: Arc<dyn SessionStore> = database.clone();
        let analytics =
            AnalyticsFacade::new(store, clock).with_windows(config.analytics.windows())?;

        Ok(Self {
            database,
            analytics,
            config: Arc::new(config),
        })
    }
}
