//! Request handlers: wire payload ⇄ core model, nothing more.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use rampart_core::{CombatAction, DiplomacyProposal, GameSnapshot};
use rampart_engine::{Engine, EngineStatus};

/// `POST /api/negotiate`: at most one ally/target proposal.
pub async fn negotiate(
    State(engine): State<Arc<Engine>>,
    Json(snapshot): Json<GameSnapshot>,
) -> Json<Vec<DiplomacyProposal>> {
    Json(engine.negotiate(&snapshot))
}

/// `POST /api/actions`: the ordered combat actions for this turn.
pub async fn plan_actions(
    State(engine): State<Arc<Engine>>,
    Json(snapshot): Json<GameSnapshot>,
) -> Json<Vec<CombatAction>> {
    Json(engine.plan_combat(&snapshot))
}

/// `GET /api/status`: diagnostic view of knowledge, weights, and sessions.
pub async fn status(State(engine): State<Arc<Engine>>) -> Json<EngineStatus> {
    Json(engine.status())
}

/// `POST /api/reset`: restore defaults, zero knowledge, clear sessions.
/// Returns the freshly zeroed status.
pub async fn reset(State(engine): State<Arc<Engine>>) -> Json<EngineStatus> {
    engine.reset();
    Json(engine.status())
}

/// `GET /health`: liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
