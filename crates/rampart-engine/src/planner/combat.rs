//! Combat planner: upgrade, armor, and attack decisions for one turn.
//!
//! Decisions run in a fixed order against a running money value: upgrade
//! first, armor second, attack last, each deducting its spend before the
//! next looks at what is left. A turn can therefore never spend more than
//! its starting resources.

use rampart_core::{CombatAction, GameSnapshot};
use tracing::debug;

use crate::phase::GamePhase;
use crate::session::TurnDecision;
use crate::weights::StrategyWeights;

/// Everything the planner produced for one turn: the wire actions plus the
/// decision record the session keeps for learning.
#[derive(Debug)]
pub struct TurnPlan {
    pub actions: Vec<CombatAction>,
    pub decision: TurnDecision,
}

/// Upgrade cost from the current level. Levels past 4 never upgrade.
fn upgrade_cost(level: u32) -> Option<i32> {
    match level {
        1 => Some(50),
        2 => Some(88),
        3 => Some(153),
        4 => Some(268),
        5 => Some(469),
        _ => None,
    }
}

/// Phase-gated upgrade decision. Returns the cost to deduct when accepted.
fn decide_upgrade(
    money: i32,
    level: u32,
    phase: GamePhase,
    threat: f64,
    weights: &StrategyWeights,
) -> Option<i32> {
    if level >= 5 {
        return None;
    }
    let cost = upgrade_cost(level)?;
    if money < cost {
        return None;
    }
    let money_f = f64::from(money);
    let cost_f = f64::from(cost);
    let affordable = match phase {
        // Early: upgrade eagerly; upgrade_priority relaxes the bar.
        GamePhase::Early => money_f >= cost_f * (1.0 - weights.upgrade_priority * 0.3),
        // Mid: only with headroom, and not while under real pressure.
        GamePhase::Mid => threat <= 0.6 && money_f >= cost_f * 1.1,
        // Late: a luxury; requires deep pockets and a quiet board.
        GamePhase::Late => money_f >= cost_f * 1.5 && threat < 0.4,
    };
    affordable.then_some(cost)
}

/// Armor decision. Reactive when last turn's incoming troops beat our armor,
/// otherwise a small phase-gated proactive buy.
fn decide_armor(
    snapshot: &GameSnapshot,
    money: i32,
    phase: GamePhase,
    threat: f64,
    weights: &StrategyWeights,
) -> i32 {
    let incoming = snapshot.incoming_damage();
    let current_armor = snapshot.player_tower.armor;

    if incoming > current_armor {
        let need = incoming - current_armor + (20.0 * threat).floor() as i32;
        let cap = (f64::from(money) * (0.3 + weights.defense_weight * 0.3)).floor() as i32;
        return need.min(cap).max(0);
    }

    match phase {
        GamePhase::Early if snapshot.turn > 3 => (money / 10).min(10),
        GamePhase::Mid if current_armor < 30 => (money / 8).min(15),
        GamePhase::Late if threat > 0.5 => ((f64::from(money) * 0.25).floor() as i32).min(25),
        _ => 0,
    }
}

/// Whether this phase permits attacking at all.
fn attack_gate(
    level: u32,
    turn: u32,
    phase: GamePhase,
    weights: &StrategyWeights,
) -> bool {
    match phase {
        GamePhase::Early => level >= 3 || (weights.aggression_weight > 0.7 && turn >= 5),
        GamePhase::Mid => level >= 2 || turn >= 10,
        GamePhase::Late => true,
    }
}

/// Pick who to hit, in priority order: an ally's requested target, then the
/// finish-off pick under high aggression, then whoever hit us hardest.
fn choose_target(snapshot: &GameSnapshot, weights: &StrategyWeights) -> Option<i32> {
    let own_id = snapshot.player_tower.player_id;

    // An ally asked us to hit someone still on the board.
    for entry in &snapshot.diplomacy {
        if entry.action.ally_id == own_id {
            if let Some(target) = entry.action.attack_target_id {
                if snapshot.enemy(target).is_some() {
                    return Some(target);
                }
            }
        }
    }

    if weights.aggression_weight > 0.6 {
        return weakest_enemy(snapshot);
    }

    // Retaliate against the heaviest attacker from last turn, if they are
    // still a visible enemy.
    let mut heaviest: Option<(i32, i32)> = None;
    for attack in &snapshot.previous_attacks {
        if attack.action.target_id != own_id {
            continue;
        }
        let troops = attack.action.troop_count;
        if heaviest.is_none_or(|(_, t)| troops > t) {
            heaviest = Some((attack.player_id, troops));
        }
    }
    if let Some((attacker, _)) = heaviest {
        if snapshot.enemy(attacker).is_some() {
            return Some(attacker);
        }
    }

    weakest_enemy(snapshot)
}

fn weakest_enemy(snapshot: &GameSnapshot) -> Option<i32> {
    let mut best: Option<(i32, i32)> = None;
    for enemy in &snapshot.enemy_towers {
        let s = enemy.defense();
        if best.is_none_or(|(_, bs)| s < bs) {
            best = Some((enemy.player_id, s));
        }
    }
    best.map(|(id, _)| id)
}

/// Troop commitment against the chosen target, capped at remaining money.
fn troop_count(target_defense: i32, money: i32, threat: f64, weights: &StrategyWeights) -> i32 {
    let money_f = f64::from(money);
    let defense_f = f64::from(target_defense);
    let conservative = (defense_f / 2.0).min(money_f / 2.0);
    let aggressive = money_f * (0.8 + weights.aggression_weight * 0.2);

    let troops = if threat > 0.7 {
        // Keep a reserve while the board is dangerous.
        conservative
    } else if weights.aggression_weight > 0.7 {
        aggressive
    } else if target_defense < money {
        // Enough on hand to wipe the target: send overkill.
        defense_f + 10.0
    } else {
        (conservative + aggressive) / 2.0
    };

    (troops.floor() as i32).min(money)
}

/// Plan one full turn against the snapshot.
pub fn plan_turn(
    snapshot: &GameSnapshot,
    weights: &StrategyWeights,
    phase: GamePhase,
    threat: f64,
) -> TurnPlan {
    let tower = &snapshot.player_tower;
    let mut money = tower.resources;
    let mut actions = Vec::new();

    if let Some(cost) = decide_upgrade(money, tower.level, phase, threat, weights) {
        actions.push(CombatAction::Upgrade);
        money -= cost;
        debug!(game_id = snapshot.game_id, turn = snapshot.turn, cost, "upgrading tower");
    }

    let armor_built = decide_armor(snapshot, money, phase, threat, weights);
    if armor_built > 0 {
        actions.push(CombatAction::Armor {
            amount: armor_built,
        });
        money -= armor_built;
        debug!(
            game_id = snapshot.game_id,
            turn = snapshot.turn,
            amount = armor_built,
            "building armor"
        );
    }

    let mut attack_actions = 0u32;
    let gated_in = money > 10
        && !snapshot.enemy_towers.is_empty()
        && attack_gate(tower.level, snapshot.turn, phase, weights);
    if gated_in {
        if let Some(target_id) = choose_target(snapshot, weights) {
            let defense = snapshot.enemy(target_id).map_or(0, |e| e.defense());
            let troops = troop_count(defense, money, threat, weights);
            if troops > 0 {
                actions.push(CombatAction::Attack {
                    target_id,
                    troop_count: troops,
                });
                money -= troops;
                attack_actions += 1;
                debug!(
                    game_id = snapshot.game_id,
                    turn = snapshot.turn,
                    target_id,
                    troops,
                    "attacking"
                );
            }
        }
    }

    TurnPlan {
        actions,
        decision: TurnDecision {
            turn: snapshot.turn,
            level: tower.level,
            armor_built,
            attack_actions,
            resources_left: money,
        },
    }
}
