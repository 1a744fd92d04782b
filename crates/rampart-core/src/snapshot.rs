//! Per-turn game snapshot as delivered by the arena.
//!
//! The arena posts one snapshot per turn: our own tower, every visible enemy
//! tower, diplomacy offers seen this turn, and the attacks launched last turn.
//! Enemy order is meaningful: tie-breaks in target/ally selection resolve to
//! the first occurrence in `enemy_towers`.

use serde::{Deserialize, Serialize};

/// Immutable per-turn input. The engine only ever reads it.
///
/// The diplomacy and attack lists default to empty when the arena omits them;
/// an absent history is not an error (planners degrade to "no action").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: i32,
    pub turn: u32,
    pub player_tower: PlayerTower,
    #[serde(default)]
    pub enemy_towers: Vec<EnemyTower>,
    #[serde(default)]
    pub diplomacy: Vec<DiplomacyEntry>,
    #[serde(default)]
    pub previous_attacks: Vec<AttackEntry>,
}

/// Our own tower: the only one whose resources we can see.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTower {
    pub player_id: i32,
    pub hp: i32,
    pub armor: i32,
    pub resources: i32,
    pub level: u32,
}

/// A visible enemy tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyTower {
    pub player_id: i32,
    pub hp: i32,
    pub armor: i32,
    pub level: u32,
}

impl EnemyTower {
    /// Effective defense: hp plus armor.
    pub fn defense(&self) -> i32 {
        self.hp + self.armor
    }
}

/// A diplomacy offer another player declared this turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiplomacyEntry {
    pub player_id: i32,
    pub action: AllianceOffer,
}

/// The body of a diplomacy offer: who the proposer wants as an ally and
/// which tower they suggest attacking together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllianceOffer {
    pub ally_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_target_id: Option<i32>,
}

/// An attack another player launched last turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackEntry {
    pub player_id: i32,
    pub action: AttackOrder,
}

/// The body of an attack record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackOrder {
    pub target_id: i32,
    pub troop_count: i32,
}

impl GameSnapshot {
    /// Our effective defense: hp plus armor.
    pub fn own_defense(&self) -> i32 {
        self.player_tower.hp + self.player_tower.armor
    }

    /// Total troops sent against us last turn.
    pub fn incoming_damage(&self) -> i32 {
        self.previous_attacks
            .iter()
            .filter(|a| a.action.target_id == self.player_tower.player_id)
            .map(|a| a.action.troop_count)
            .sum()
    }

    /// Look up a visible enemy tower by player id.
    pub fn enemy(&self, player_id: i32) -> Option<&EnemyTower> {
        self.enemy_towers.iter().find(|e| e.player_id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_json() -> &'static str {
        r#"{
            "gameId": 7,
            "turn": 4,
            "playerTower": {"playerId": 1, "hp": 80, "armor": 20, "resources": 150, "level": 2},
            "enemyTowers": [
                {"playerId": 2, "hp": 100, "armor": 0, "level": 1},
                {"playerId": 3, "hp": 60, "armor": 30, "level": 3}
            ],
            "diplomacy": [
                {"playerId": 2, "action": {"allyId": 1, "attackTargetId": 3}}
            ],
            "previousAttacks": [
                {"playerId": 3, "action": {"targetId": 1, "troopCount": 25}},
                {"playerId": 2, "action": {"targetId": 3, "troopCount": 10}}
            ]
        }"#
    }

    #[test]
    fn deserializes_arena_wire_shape() {
        let snap: GameSnapshot = serde_json::from_str(arena_json()).unwrap();
        assert_eq!(snap.game_id, 7);
        assert_eq!(snap.turn, 4);
        assert_eq!(snap.player_tower.resources, 150);
        assert_eq!(snap.enemy_towers.len(), 2);
        assert_eq!(snap.diplomacy[0].action.attack_target_id, Some(3));
        assert_eq!(snap.previous_attacks[0].action.troop_count, 25);
    }

    #[test]
    fn missing_history_lists_default_to_empty() {
        let snap: GameSnapshot = serde_json::from_str(
            r#"{
                "gameId": 1,
                "turn": 1,
                "playerTower": {"playerId": 1, "hp": 100, "armor": 0, "resources": 100, "level": 1}
            }"#,
        )
        .unwrap();
        assert!(snap.enemy_towers.is_empty());
        assert!(snap.diplomacy.is_empty());
        assert!(snap.previous_attacks.is_empty());
    }

    #[test]
    fn incoming_damage_counts_only_attacks_on_self() {
        let snap: GameSnapshot = serde_json::from_str(arena_json()).unwrap();
        // Only player 3's 25-troop attack targets us; player 2 hit player 3.
        assert_eq!(snap.incoming_damage(), 25);
    }

    #[test]
    fn own_defense_is_hp_plus_armor() {
        let snap: GameSnapshot = serde_json::from_str(arena_json()).unwrap();
        assert_eq!(snap.own_defense(), 100);
        assert_eq!(snap.enemy(3).unwrap().defense(), 90);
        assert!(snap.enemy(99).is_none());
    }
}
