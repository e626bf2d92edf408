// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Service banner, liveness probe, and a readiness probe that touches the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;
use trainlog_core::constants::service_names;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_banner))
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_banner() -> Json<Value> {
        Json(json!({ "message": service_names::BANNER }))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::TRAINLOG_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    /// Ready once the store answers a trivial query
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<Value>) {
        match resources.database.count_athletes().await {
            Ok(_) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ready",
                    "timestamp": Utc::now().to_rfc3339()
                })),
            ),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "unavailable",
                        "timestamp": Utc::now().to_rfc3339()
                    })),
                )
            }
        }
    }
}
