//! Adaptive strategy weights.
//!
//! Four continuous parameters bias the planners. Learning nudges them after
//! every terminated game; every mutation re-clamps to `[0.0, 1.0]` so a long
//! losing streak can saturate a weight but never push it out of range.

use serde::Serialize;

/// The policy bias parameters. Copy-cheap so planners work on a snapshot
/// taken under a short read lock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyWeights {
    /// How eagerly to buy tower upgrades (relaxes the early-game cost gate).
    pub upgrade_priority: f64,
    /// How much money may go into armor when under fire.
    pub defense_weight: f64,
    /// Attack earlier, commit more troops.
    pub aggression_weight: f64,
    /// Court the strongest enemy as ally rather than the highest-level one.
    pub prefer_strongest_ally: f64,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            upgrade_priority: 0.7,
            defense_weight: 0.4,
            aggression_weight: 0.5,
            prefer_strongest_ally: 0.7,
        }
    }
}

impl StrategyWeights {
    /// Apply a delta to one weight, clamping back into `[0, 1]`.
    pub fn nudge(weight: &mut f64, delta: f64) {
        *weight = (*weight + delta).clamp(0.0, 1.0);
    }

    /// True when every weight sits inside `[0, 1]`.
    pub fn in_range(&self) -> bool {
        [
            self.upgrade_priority,
            self.defense_weight,
            self.aggression_weight,
            self.prefer_strongest_ally,
        ]
        .iter()
        .all(|w| (0.0..=1.0).contains(w))
    }
}
