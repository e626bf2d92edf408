// ABOUTME: Route handlers for the athletes REST API
// ABOUTME: List, get, create, update and delete athlete profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::{json_body, parse_id, ApiResponse};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use trainlog_core::errors::AppError;
use trainlog_core::models::{AthleteId, NewAthlete};

/// Athletes routes handler
pub struct AthleteRoutes;

impl AthleteRoutes {
    /// Create all athlete routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/athletes",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/athletes/:id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/athletes
    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Result<Response, AppError> {
        let athletes = resources.database.list_athletes().await?;
        Ok(Json(ApiResponse::ok(athletes)).into_response())
    }

    /// Handle GET /api/athletes/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id: AthleteId = parse_id(&id)?;
        let athlete = resources
            .database
            .get_athlete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Athlete").with_resource_id(id.to_string()))?;
        Ok(Json(ApiResponse::ok(athlete)).into_response())
    }

    /// Handle POST /api/athletes
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewAthlete>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let athlete = resources.database.create_athlete(json_body(body)?).await?;
        Ok((
            StatusCode::CREATED,
            Json(ApiResponse::with_message(athlete, "Athlete created successfully")),
        )
            .into_response())
    }

    /// Handle PUT /api/athletes/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Result<Json<NewAthlete>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id: AthleteId = parse_id(&id)?;
        let athlete = resources
            .database
            .update_athlete(id, json_body(body)?)
            .await?
            .ok_or_else(|| AppError::not_found("Athlete").with_resource_id(id.to_string()))?;
        Ok(Json(ApiResponse::with_message(athlete, "Athlete updated successfully")).into_response())
    }

    /// Handle DELETE /api/athletes/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id: AthleteId = parse_id(&id)?;
        if !resources.database.delete_athlete(id).await? {
            return Err(AppError::not_found("Athlete").with_resource_id(id.to_string()));
        }
        Ok(Json(ApiResponse::message("Athlete deleted successfully")).into_response())
    }
}
