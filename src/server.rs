// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Merges route groups, applies CORS, tracing and request-id layers, serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::config::ServerConfig;
use crate::resources::ServerResources;
use crate::routes::{AnalyticsRoutes, AthleteRoutes, HealthRoutes, SessionRoutes};
use anyhow::Result;
use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info, info_span, warn, Span};
use trainlog_core::constants::defaults;

/// Header carrying the per-request correlation id
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Configure CORS for the browser frontend
///
/// `*` allows any origin. Anything else must be a single valid origin; an
/// unparseable value falls back to the default frontend origin.
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origin = config.cors.allowed_origin.trim();
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        HeaderValue::from_str(origin).map_or_else(
            |_| {
                warn!(origin, "Invalid CORS origin, using the default");
                AllowOrigin::exact(HeaderValue::from_static(defaults::CORS_ALLOWED_ORIGIN))
            },
            AllowOrigin::exact,
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(AthleteRoutes::routes(resources.clone()))
        .merge(SessionRoutes::routes(resources.clone()))
        .merge(AnalyticsRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(cors),
        )
}

/// The trainlog HTTP server
pub struct TrainlogServer {
    resources: Arc<ServerResources>,
}

impl TrainlogServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Router with every route and layer applied
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(self.resources.clone())
    }

    /// Bind and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address).await?;
        info!("HTTP server listening on http://{address}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }
}
