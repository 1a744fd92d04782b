//! The engine facade: session tracking, planning, and the learning loop
//! behind the two boundary operations.
//!
//! Shared state and its guards:
//!
//! - `sessions`: `DashMap` keyed by game id; lookup/insert/remove for one
//!   game never blocks turns for another.
//! - `weights`: `RwLock`; planners take a cheap read snapshot, only the
//!   learning step writes.
//! - `knowledge`: `Mutex`; doubles as the process-wide learning critical
//!   section so weight updates from concurrent terminations never interleave.
//!
//! No error leaves this module. A failed knowledge save is logged and the
//! in-memory state kept, so the next terminated game retries the write.

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use rampart_core::{CombatAction, DiplomacyProposal, GameSnapshot};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::knowledge::{KnowledgeBase, KnowledgeStore};
use crate::learning;
use crate::phase::GamePhase;
use crate::planner;
use crate::session::{GameSession, terminal_outcome};
use crate::threat::compute_threat;
use crate::weights::StrategyWeights;

/// Read-only diagnostic view of the engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub knowledge: KnowledgeBase,
    pub win_rate: f64,
    pub weights: StrategyWeights,
    pub active_sessions: usize,
}

/// The decision-and-adaptation engine. One instance per process, shared
/// across concurrent callers.
pub struct Engine {
    weights: RwLock<StrategyWeights>,
    knowledge: Mutex<KnowledgeBase>,
    sessions: DashMap<i32, GameSession>,
    store: Box<dyn KnowledgeStore>,
}

impl Engine {
    /// Build an engine, restoring knowledge from the store. An absent or
    /// unreadable record starts a fresh zeroed base, never a fatal error.
    pub fn new(store: Box<dyn KnowledgeStore>) -> Self {
        let knowledge = match store.load() {
            Ok(Some(kb)) => {
                info!(
                    games = kb.total_games,
                    win_rate = kb.win_rate(),
                    "knowledge restored"
                );
                kb
            }
            Ok(None) => {
                info!("no knowledge record found, starting fresh");
                KnowledgeBase::default()
            }
            Err(e) => {
                warn!(error = %e, "knowledge record unreadable, starting fresh");
                KnowledgeBase::default()
            }
        };
        Self {
            weights: RwLock::new(StrategyWeights::default()),
            knowledge: Mutex::new(knowledge),
            sessions: DashMap::new(),
            store,
        }
    }

    /// Diplomacy operation: at most one ally/target proposal.
    pub fn negotiate(&self, snapshot: &GameSnapshot) -> Vec<DiplomacyProposal> {
        let threat = compute_threat(snapshot);
        self.track(snapshot, threat);

        let weights = *self.weights.read();
        let proposals = planner::negotiate(snapshot, &weights);

        self.finalize_if_terminal(snapshot);
        proposals
    }

    /// Combat operation: the ordered action list for this turn.
    pub fn plan_combat(&self, snapshot: &GameSnapshot) -> Vec<CombatAction> {
        let threat = compute_threat(snapshot);
        let phase = GamePhase::of_turn(snapshot.turn);
        self.track(snapshot, threat);
        debug!(
            game_id = snapshot.game_id,
            turn = snapshot.turn,
            ?phase,
            threat,
            "planning turn"
        );

        let weights = *self.weights.read();
        let plan = planner::plan_turn(snapshot, &weights, phase, threat);

        if let Some(mut session) = self.sessions.get_mut(&snapshot.game_id) {
            session.record(plan.decision);
        }

        self.finalize_if_terminal(snapshot);
        plan.actions
    }

    /// Diagnostic view: knowledge, derived win rate, weights, live sessions.
    pub fn status(&self) -> EngineStatus {
        let knowledge = self.knowledge.lock().clone();
        let win_rate = knowledge.win_rate();
        EngineStatus {
            knowledge,
            win_rate,
            weights: *self.weights.read(),
            active_sessions: self.sessions.len(),
        }
    }

    /// Restore default weights, zero the knowledge base, drop all sessions,
    /// and persist the zeroed state.
    pub fn reset(&self) {
        let mut knowledge = self.knowledge.lock();
        *knowledge = KnowledgeBase::default();
        *self.weights.write() = StrategyWeights::default();
        self.sessions.clear();
        if let Err(e) = self.store.save(&knowledge) {
            warn!(error = %e, "failed to persist zeroed knowledge");
        }
        info!("engine reset: weights, knowledge, and sessions cleared");
    }

    /// Create or update the session for this snapshot. A game id seen again
    /// after termination starts over as a fresh session.
    fn track(&self, snapshot: &GameSnapshot, threat: f64) {
        self.sessions
            .entry(snapshot.game_id)
            .or_insert_with(|| {
                debug!(game_id = snapshot.game_id, "session opened");
                GameSession::new(snapshot.game_id)
            })
            .observe(snapshot.turn, threat);
    }

    /// Run learning and drop the session when this snapshot ends the game.
    /// The `remove` is the idempotency point: concurrent terminal snapshots
    /// for one game id learn exactly once.
    fn finalize_if_terminal(&self, snapshot: &GameSnapshot) {
        let Some(won) = terminal_outcome(snapshot) else {
            return;
        };
        let Some((_, session)) = self.sessions.remove(&snapshot.game_id) else {
            return;
        };

        let summary = learning::summarize(&session.decisions);

        // Process-wide learning critical section.
        let mut knowledge = self.knowledge.lock();
        {
            let mut weights = self.weights.write();
            learning::adjust_weights(&mut weights, &summary, won, session.max_threat);
            info!(
                game_id = session.game_id,
                won,
                turns = session.current_turn,
                max_threat = session.max_threat,
                avg_level = summary.avg_level,
                total_attacks = summary.total_attacks,
                upgrade_priority = weights.upgrade_priority,
                defense_weight = weights.defense_weight,
                aggression_weight = weights.aggression_weight,
                "game terminated, weights adjusted"
            );
        }
        knowledge.record_game(won, summary.avg_level, summary.first_attack_turn);
        if let Err(e) = self.store.save(&knowledge) {
            warn!(error = %e, "failed to persist knowledge, keeping in-memory state");
        }
    }
}
