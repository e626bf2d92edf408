// ABOUTME: Route handlers for training analytics
// ABOUTME: Dashboard, weekly and monthly time, activity frequency, progress, recommendations, bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! Analytics routes
//!
//! Thin adapters over [`AnalyticsFacade`]: parse the athlete id and the optional
//! window override, then wrap the result in the success envelope.
//!
//! [`AnalyticsFacade`]: trainlog_intelligence::AnalyticsFacade

use super::{parse_id, query_params, ApiResponse};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use trainlog_core::errors::AppError;
use trainlog_core::models::AthleteId;

/// `?weeks=N`
#[derive(Debug, Default, Deserialize)]
struct WeeksQuery {
    weeks: Option<u32>,
}

/// `?months=N`
#[derive(Debug, Default, Deserialize)]
struct MonthsQuery {
    months: Option<u32>,
}

/// Analytics routes handler
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/analytics/dashboard", get(Self::handle_dashboard))
            .route("/api/analytics/weekly/:athlete_id", get(Self::handle_weekly))
            .route("/api/analytics/monthly/:athlete_id", get(Self::handle_monthly))
            .route("/api/analytics/activity/:athlete_id", get(Self::handle_activity))
            .route("/api/analytics/progress/:athlete_id", get(Self::handle_progress))
            .route(
                "/api/analytics/recommendations/:athlete_id",
                get(Self::handle_recommendations),
            )
            .route("/api/analytics/bundle/:athlete_id", get(Self::handle_bundle))
            .with_state(resources)
    }

    /// Handle GET /api/analytics/dashboard
    async fn handle_dashboard(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let summary = resources.analytics.dashboard().await?;
        Ok(Json(ApiResponse::ok(summary)).into_response())
    }

    /// Handle GET /api/analytics/weekly/:athlete_id
    async fn handle_weekly(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
        query: Result<Query<WeeksQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        let query = query_params(query)?;
        let buckets = resources
            .analytics
            .weekly_training_time(athlete_id, query.weeks)
            .await?;
        Ok(Json(ApiResponse::ok(buckets)).into_response())
    }

    /// Handle GET /api/analytics/monthly/:athlete_id
    async fn handle_monthly(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
        query: Result<Query<MonthsQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        let query = query_params(query)?;
        let buckets = resources
            .analytics
            .monthly_training_time(athlete_id, query.months)
            .await?;
        Ok(Json(ApiResponse::ok(buckets)).into_response())
    }

    /// Handle GET /api/analytics/activity/:athlete_id
    async fn handle_activity(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        let stats = resources.analytics.activity_frequency(athlete_id).await?;
        Ok(Json(ApiResponse::ok(stats)).into_response())
    }

    /// Handle GET /api/analytics/progress/:athlete_id
    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
        query: Result<Query<MonthsQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        let query = query_params(query)?;
        let series = resources
            .analytics
            .progress_metrics(athlete_id, query.months)
            .await?;
        Ok(Json(ApiResponse::ok(series)).into_response())
    }

    /// Handle GET /api/analytics/recommendations/:athlete_id
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        let set = resources.analytics.recommendations(athlete_id).await?;
        Ok(Json(ApiResponse::ok(set)).into_response())
    }

    /// Handle GET /api/analytics/bundle/:athlete_id
    async fn handle_bundle(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        let bundle = resources.analytics.bundle(athlete_id).await?;
        Ok(Json(ApiResponse::ok(bundle)).into_response())
    }
}
