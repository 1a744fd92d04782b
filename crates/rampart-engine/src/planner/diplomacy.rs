//! Diplomacy planner: pick an ally worth courting and a common target.
//!
//! Ally choice follows `prefer_strongest_ally`: above 0.5 we court the enemy
//! with the best overall strength score, otherwise the highest-level one.
//! The target is whoever is easiest to bring down, excluding the ally.

use rampart_core::snapshot::EnemyTower;
use rampart_core::{DiplomacyProposal, GameSnapshot};

use crate::weights::StrategyWeights;

/// Strength score used when courting the strongest enemy: levels count for
/// twenty points of defense each.
fn strength_score(enemy: &EnemyTower) -> i32 {
    enemy.defense() + enemy.level as i32 * 20
}

/// First-match-wins argmax over the enemy list.
fn pick_max_by<F>(enemies: &[EnemyTower], score: F) -> Option<&EnemyTower>
where
    F: Fn(&EnemyTower) -> i32,
{
    let mut best: Option<(&EnemyTower, i32)> = None;
    for enemy in enemies {
        let s = score(enemy);
        if best.is_none_or(|(_, bs)| s > bs) {
            best = Some((enemy, s));
        }
    }
    best.map(|(e, _)| e)
}

/// The enemy we would rather have beside us than against us.
pub fn decide_ally(snapshot: &GameSnapshot, weights: &StrategyWeights) -> Option<i32> {
    let enemies = &snapshot.enemy_towers;
    let pick = if weights.prefer_strongest_ally > 0.5 {
        pick_max_by(enemies, strength_score)
    } else {
        pick_max_by(enemies, |e| e.level as i32)
    };
    pick.map(|e| e.player_id)
}

/// The weakest remaining enemy, excluding the prospective ally.
pub fn decide_target(snapshot: &GameSnapshot, ally: Option<i32>) -> Option<i32> {
    let mut best: Option<(&EnemyTower, i32)> = None;
    for enemy in &snapshot.enemy_towers {
        if Some(enemy.player_id) == ally {
            continue;
        }
        let s = enemy.defense();
        if best.is_none_or(|(_, bs)| s < bs) {
            best = Some((enemy, s));
        }
    }
    best.map(|(e, _)| e.player_id)
}

/// Produce at most one proposal. Empty when no enemies are visible.
pub fn negotiate(snapshot: &GameSnapshot, weights: &StrategyWeights) -> Vec<DiplomacyProposal> {
    let Some(ally_id) = decide_ally(snapshot, weights) else {
        return Vec::new();
    };
    let attack_target_id = decide_target(snapshot, Some(ally_id));
    vec![DiplomacyProposal {
        ally_id,
        attack_target_id,
    }]
}
