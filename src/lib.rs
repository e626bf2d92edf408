// ABOUTME: Main library entry point for the trainlog athlete training server
// ABOUTME: Configuration, logging, SQLite storage, HTTP routes and server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

#![deny(unsafe_code)]

//! # Trainlog Server
//!
//! REST backend for logging athletes and their training sessions, with
//! analytics served from the `trainlog-intelligence` engine.
//!
//! ## Architecture
//!
//! - **config**: environment-driven `ServerConfig`
//! - **logging**: `tracing` subscriber setup
//! - **database**: `sqlx` `SQLite` store implementing `SessionStore`
//! - **routes**: axum handlers grouped by resource
//! - **server**: router assembly, middleware and graceful shutdown

/// Environment configuration
pub mod config;

/// SQLite session store
pub mod database;

/// Structured logging setup
pub mod logging;

/// Shared request state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
