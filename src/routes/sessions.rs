// ABOUTME: Route handlers for the training sessions REST API
// ABOUTME: Joined listing, per-athlete listing, create, update and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use super::{json_body, parse_id, ApiResponse};
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use trainlog_core::errors::AppError;
use trainlog_core::models::{AthleteId, NewSession, SessionFilter, SessionId};

/// Sessions routes handler
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create all session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/sessions",
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                "/api/sessions/athlete/:athlete_id",
                get(Self::handle_list_by_athlete),
            )
            .route(
                "/api/sessions/:id",
                put(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/sessions
    async fn handle_list(State(resources): State<Arc<ServerResources>>) -> Result<Response, AppError> {
        let sessions = resources.database.list_sessions(&SessionFilter::all()).await?;
        Ok(Json(ApiResponse::ok(sessions)).into_response())
    }

    /// Handle GET /api/sessions/athlete/:athlete_id
    async fn handle_list_by_athlete(
        State(resources): State<Arc<ServerResources>>,
        Path(athlete_id): Path<String>,
    ) -> Result<Response, AppError> {
        let athlete_id: AthleteId = parse_id(&athlete_id)?;
        if resources.database.get_athlete(athlete_id).await?.is_none() {
            return Err(AppError::not_found("Athlete").with_resource_id(athlete_id.to_string()));
        }
        let sessions = resources
            .database
            .list_sessions_for_athlete(athlete_id, &SessionFilter::all())
            .await?;
        Ok(Json(ApiResponse::ok(sessions)).into_response())
    }

    /// Handle POST /api/sessions
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<NewSession>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let session = resources.database.create_session(json_body(body)?).await?;
        Ok((
            StatusCode::CREATED,
            Json(ApiResponse::with_message(
                session,
                "Training session logged successfully",
            )),
        )
            .into_response())
    }

    /// Handle PUT /api/sessions/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Result<Json<NewSession>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let id: SessionId = parse_id(&id)?;
        let session = resources
            .database
            .update_session(id, json_body(body)?)
            .await?
            .ok_or_else(|| AppError::not_found("Session").with_resource_id(id.to_string()))?;
        Ok(Json(ApiResponse::with_message(session, "Session updated successfully")).into_response())
    }

    /// Handle DELETE /api/sessions/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id: SessionId = parse_id(&id)?;
        if !resources.database.delete_session(id).await? {
            return Err(AppError::not_found("Session").with_resource_id(id.to_string()));
        }
        Ok(Json(ApiResponse::message("Session deleted successfully")).into_response())
    }
}
