//! Coarse game phase derived from the turn number.

/// Game stage. Monotonic in the turn number; a game never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Turns 1–10: build up economy and levels.
    Early,
    /// Turns 11–20: contest the board.
    Mid,
    /// Turn 21 onwards: close out.
    Late,
}

impl GamePhase {
    /// Phase for a given turn.
    pub fn of_turn(turn: u32) -> Self {
        match turn {
            0..=10 => Self::Early,
            11..=20 => Self::Mid,
            _ => Self::Late,
        }
    }
}
