//! Per-game session state.
//!
//! A session spans one game id from its first snapshot to termination. The
//! engine owns the session map exclusively; sessions are never aliased out.
//! A snapshot arriving after a session was removed simply re-creates it;
//! idempotent, not an error.

use rampart_core::GameSnapshot;

/// What the combat planner did on one turn. Append-only; consumed as an
/// aggregate by learning once the game ends, never re-read by the planner.
#[derive(Debug, Clone, Copy)]
pub struct TurnDecision {
    pub turn: u32,
    /// Tower level when the decision was made.
    pub level: u32,
    /// Armor bought this turn (0 if none).
    pub armor_built: i32,
    /// Attack actions issued this turn.
    pub attack_actions: u32,
    /// Money left after planning.
    pub resources_left: i32,
}

/// Live tracking record for one active game.
#[derive(Debug)]
pub struct GameSession {
    pub game_id: i32,
    pub current_turn: u32,
    /// Highest threat seen over the whole game; feeds the loss-side
    /// defense adjustment.
    pub max_threat: f64,
    pub decisions: Vec<TurnDecision>,
}

impl GameSession {
    pub fn new(game_id: i32) -> Self {
        Self {
            game_id,
            current_turn: 0,
            max_threat: 0.0,
            decisions: Vec::new(),
        }
    }

    /// Update the session for a fresh snapshot.
    pub fn observe(&mut self, turn: u32, threat: f64) {
        self.current_turn = turn;
        if threat > self.max_threat {
            self.max_threat = threat;
        }
    }

    pub fn record(&mut self, decision: TurnDecision) {
        self.decisions.push(decision);
    }
}

/// Termination check: `Some(won)` when this snapshot ends the game.
///
/// Loss takes precedence: a snapshot with our hp at zero and no enemies
/// left counts as a loss, matching the order the arena resolves eliminations.
pub fn terminal_outcome(snapshot: &GameSnapshot) -> Option<bool> {
    if snapshot.player_tower.hp <= 0 {
        Some(false)
    } else if snapshot.enemy_towers.is_empty() {
        Some(true)
    } else {
        None
    }
}
