// ABOUTME: Server binary for the trainlog athlete training API
// ABOUTME: Loads configuration, opens the session store and serves HTTP until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

//! # Trainlog Server Binary

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tokio::fs;
use tracing::{error, info};
use trainlog_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    server::TrainlogServer,
};

#[derive(Parser)]
#[command(name = "trainlog-server")]
#[command(about = "Athlete training log API with training analytics")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL, e.g. `sqlite:./data/trainlog.db` or `sqlite::memory:`
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url)?;
    }

    info!("{}", config.summary());

    if let DatabaseUrl::SQLite { path } = &config.database.url {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
    }

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    let resources = Arc::new(ServerResources::new(database, config.clone())?);

    display_available_endpoints(&config);

    if let Err(e) = TrainlogServer::new(resources).run().await {
        error!("Server error: {e}");
        return Err(e);
    }
    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());

    info!("=== Available API Endpoints ===");
    info!("Service:");
    info!("   Banner:            GET  {base}/");
    info!("   Health Check:      GET  {base}/health");
    info!("   Readiness:         GET  {base}/ready");
    info!("Athletes:");
    info!("   List / Create:     GET|POST {base}/api/athletes");
    info!("   Get / Update / Delete: GET|PUT|DELETE {base}/api/athletes/{{id}}");
    info!("Training Sessions:");
    info!("   List / Create:     GET|POST {base}/api/sessions");
    info!("   By Athlete:        GET  {base}/api/sessions/athlete/{{athlete_id}}");
    info!("   Update / Delete:   PUT|DELETE {base}/api/sessions/{{id}}");
    info!("Analytics:");
    info!("   Dashboard:         GET  {base}/api/analytics/dashboard");
    info!("   Weekly Time:       GET  {base}/api/analytics/weekly/{{athlete_id}}?weeks=N");
    info!("   Monthly Time:      GET  {base}/api/analytics/monthly/{{athlete_id}}?months=N");
    info!("   Activity Frequency: GET {base}/api/analytics/activity/{{athlete_id}}");
    info!("   Progress:          GET  {base}/api/analytics/progress/{{athlete_id}}?months=N");
    info!("   Recommendations:   GET  {base}/api/analytics/recommendations/{{athlete_id}}");
    info!("   Bundle:            GET  {base}/api/analytics/bundle/{{athlete_id}}");
    info!("=== End of Endpoint List ===");
}
