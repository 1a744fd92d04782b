//! Combat actions and diplomacy proposals emitted by the engine.

use serde::{Deserialize, Serialize};

/// One combat action for the current turn.
///
/// Serialized with a `type` tag: `{"type":"upgrade"}`,
/// `{"type":"armor","amount":10}`,
/// `{"type":"attack","targetId":3,"troopCount":40}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CombatAction {
    Upgrade,
    Armor {
        amount: i32,
    },
    #[serde(rename_all = "camelCase")]
    Attack {
        target_id: i32,
        troop_count: i32,
    },
}

/// A suggested alliance: the ally we want and, optionally, a common target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiplomacyProposal {
    pub ally_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_target_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_serialize_with_type_tag() {
        assert_eq!(
            serde_json::to_value(CombatAction::Upgrade).unwrap(),
            serde_json::json!({"type": "upgrade"})
        );
        assert_eq!(
            serde_json::to_value(CombatAction::Armor { amount: 15 }).unwrap(),
            serde_json::json!({"type": "armor", "amount": 15})
        );
        assert_eq!(
            serde_json::to_value(CombatAction::Attack {
                target_id: 3,
                troop_count: 40
            })
            .unwrap(),
            serde_json::json!({"type": "attack", "targetId": 3, "troopCount": 40})
        );
    }

    #[test]
    fn proposal_omits_absent_target() {
        let with = DiplomacyProposal {
            ally_id: 2,
            attack_target_id: Some(3),
        };
        assert_eq!(
            serde_json::to_value(&with).unwrap(),
            serde_json::json!({"allyId": 2, "attackTargetId": 3})
        );

        let without = DiplomacyProposal {
            ally_id: 2,
            attack_target_id: None,
        };
        assert_eq!(
            serde_json::to_value(&without).unwrap(),
            serde_json::json!({"allyId": 2})
        );
    }
}
