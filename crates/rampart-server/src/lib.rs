//! # rampart-server
//!
//! Thin HTTP boundary for the Rampart bot: JSON in, JSON out, no game logic.
//!
//! Routes:
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/api/negotiate` | POST | Snapshot → diplomacy proposals |
//! | `/api/actions` | POST | Snapshot → ordered combat actions |
//! | `/api/status` | GET | Knowledge, win rate, weights, live sessions |
//! | `/api/reset` | POST | Default weights, zeroed knowledge, persisted |
//! | `/health` | GET | Liveness |
//!
//! The handlers only convert wire payloads to and from the core data model
//! and invoke the engine; every response is a valid (possibly empty) list.

#![deny(unsafe_code)]

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use rampart_engine::Engine;
use tower_http::trace::TraceLayer;

/// Build the application router around a shared engine.
pub fn router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/api/negotiate", post(handlers::negotiate))
        .route("/api/actions", post(handlers::plan_actions))
        .route("/api/status", get(handlers::status))
        .route("/api/reset", post(handlers::reset))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}
