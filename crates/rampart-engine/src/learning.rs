//! Post-game adaptation: turn a finished session's decision history into
//! weight nudges and knowledge-base samples.
//!
//! This is deliberately not machine learning: a handful of threshold rules
//! nudge the weights a few hundredths per game, clamped to [0,1], which is
//! enough for session-to-session drift toward what wins.

use crate::session::TurnDecision;
use crate::weights::StrategyWeights;

/// Turn of record when a game ended without a single attack.
pub const NO_ATTACK_TURN: u32 = 25;

/// Aggregates over one session's decision history.
#[derive(Debug, Clone, Copy)]
pub struct SessionSummary {
    /// Mean tower level across decisions.
    pub avg_level: f64,
    /// Mean armor bought per turn.
    pub avg_armor: f64,
    /// Attack actions over the whole game.
    pub total_attacks: u32,
    /// First turn that issued an attack; [`NO_ATTACK_TURN`] if none did.
    pub first_attack_turn: u32,
}

/// Summarize a session's history. An empty history (game ended before any
/// combat plan ran) yields zeros and the no-attack sentinel.
pub fn summarize(decisions: &[TurnDecision]) -> SessionSummary {
    if decisions.is_empty() {
        return SessionSummary {
            avg_level: 0.0,
            avg_armor: 0.0,
            total_attacks: 0,
            first_attack_turn: NO_ATTACK_TURN,
        };
    }
    let n = decisions.len() as f64;
    let avg_level = decisions.iter().map(|d| f64::from(d.level)).sum::<f64>() / n;
    let avg_armor = decisions
        .iter()
        .map(|d| f64::from(d.armor_built))
        .sum::<f64>()
        / n;
    let total_attacks = decisions.iter().map(|d| d.attack_actions).sum();
    let first_attack_turn = decisions
        .iter()
        .find(|d| d.attack_actions > 0)
        .map_or(NO_ATTACK_TURN, |d| d.turn);
    SessionSummary {
        avg_level,
        avg_armor,
        total_attacks,
        first_attack_turn,
    }
}

/// Apply the win/loss update rules to the weights. Every change re-clamps
/// to [0,1].
pub fn adjust_weights(
    weights: &mut StrategyWeights,
    summary: &SessionSummary,
    won: bool,
    max_threat: f64,
) {
    if won {
        // Reinforce what worked.
        if summary.avg_level >= 4.0 {
            StrategyWeights::nudge(&mut weights.upgrade_priority, 0.05);
        }
        if summary.first_attack_turn <= 10 {
            StrategyWeights::nudge(&mut weights.aggression_weight, 0.05);
        }
        if summary.first_attack_turn >= 15 {
            StrategyWeights::nudge(&mut weights.aggression_weight, -0.03);
        }
        if summary.avg_armor < 20.0 {
            StrategyWeights::nudge(&mut weights.defense_weight, -0.03);
        }
    } else {
        // Correct what plausibly lost the game.
        if summary.avg_level < 3.0 {
            StrategyWeights::nudge(&mut weights.upgrade_priority, 0.08);
        }
        if max_threat > 0.8 && summary.avg_armor < 30.0 {
            StrategyWeights::nudge(&mut weights.defense_weight, 0.08);
        }
        if summary.total_attacks < 5 {
            StrategyWeights::nudge(&mut weights.aggression_weight, 0.05);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decision(turn: u32, level: u32, armor: i32, attacks: u32) -> TurnDecision {
        TurnDecision {
            turn,
            level,
            armor_built: armor,
            attack_actions: attacks,
            resources_left: 0,
        }
    }

    #[test]
    fn empty_history_summarizes_to_sentinel() {
        let s = summarize(&[]);
        assert_eq!(s.avg_level, 0.0);
        assert_eq!(s.avg_armor, 0.0);
        assert_eq!(s.total_attacks, 0);
        assert_eq!(s.first_attack_turn, NO_ATTACK_TURN);
    }

    #[test]
    fn summary_averages_and_first_attack() {
        let history = [
            decision(1, 1, 0, 0),
            decision(2, 2, 10, 0),
            decision(3, 2, 20, 1),
            decision(4, 3, 10, 1),
        ];
        let s = summarize(&history);
        assert_eq!(s.avg_level, 2.0);
        assert_eq!(s.avg_armor, 10.0);
        assert_eq!(s.total_attacks, 2);
        assert_eq!(s.first_attack_turn, 3);
    }

    #[test]
    fn no_attacks_defaults_first_attack_turn() {
        let history = [decision(1, 1, 5, 0), decision(2, 1, 5, 0)];
        assert_eq!(summarize(&history).first_attack_turn, NO_ATTACK_TURN);
    }

    #[test]
    fn win_with_high_level_and_early_attacks_reinforces() {
        let mut w = StrategyWeights::default();
        let s = SessionSummary {
            avg_level: 4.5,
            avg_armor: 10.0,
            total_attacks: 8,
            first_attack_turn: 6,
        };
        adjust_weights(&mut w, &s, true, 0.5);
        assert!((w.upgrade_priority - 0.75).abs() < 1e-9);
        assert!((w.aggression_weight - 0.55).abs() < 1e-9);
        // Light armor on a win: spend less on defense.
        assert!((w.defense_weight - 0.37).abs() < 1e-9);
    }

    #[test]
    fn win_with_late_first_attack_tempers_aggression() {
        let mut w = StrategyWeights::default();
        let s = SessionSummary {
            avg_level: 2.0,
            avg_armor: 25.0,
            total_attacks: 2,
            first_attack_turn: 18,
        };
        adjust_weights(&mut w, &s, true, 0.5);
        assert!((w.aggression_weight - 0.47).abs() < 1e-9);
        assert_eq!(w.upgrade_priority, 0.7);
        assert_eq!(w.defense_weight, 0.4);
    }

    #[test]
    fn loss_rules_push_the_right_weights() {
        let mut w = StrategyWeights::default();
        let s = SessionSummary {
            avg_level: 1.5,
            avg_armor: 5.0,
            total_attacks: 1,
            first_attack_turn: NO_ATTACK_TURN,
        };
        adjust_weights(&mut w, &s, false, 0.9);
        assert!((w.upgrade_priority - 0.78).abs() < 1e-9);
        assert!((w.defense_weight - 0.48).abs() < 1e-9);
        assert!((w.aggression_weight - 0.55).abs() < 1e-9);
    }

    #[test]
    fn loss_with_calm_game_leaves_defense_alone() {
        let mut w = StrategyWeights::default();
        let s = SessionSummary {
            avg_level: 4.0,
            avg_armor: 5.0,
            total_attacks: 10,
            first_attack_turn: 3,
        };
        adjust_weights(&mut w, &s, false, 0.4);
        assert_eq!(w, StrategyWeights::default());
    }

    proptest! {
        #[test]
        fn weights_stay_clamped_for_all_outcomes(
            up in 0.0f64..=1.0,
            def in 0.0f64..=1.0,
            agg in 0.0f64..=1.0,
            ally in 0.0f64..=1.0,
            avg_level in 0.0f64..=6.0,
            avg_armor in 0.0f64..=100.0,
            total_attacks in 0u32..50,
            first_attack_turn in 0u32..=30,
            max_threat in 0.0f64..=1.0,
            won in any::<bool>(),
            games in 1usize..20,
        ) {
            let mut w = StrategyWeights {
                upgrade_priority: up,
                defense_weight: def,
                aggression_weight: agg,
                prefer_strongest_ally: ally,
            };
            let s = SessionSummary { avg_level, avg_armor, total_attacks, first_attack_turn };
            for _ in 0..games {
                adjust_weights(&mut w, &s, won, max_threat);
                prop_assert!(w.in_range());
            }
        }
    }
}
