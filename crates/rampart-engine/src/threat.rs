//! Threat assessment: a normalized [0,1] estimate of how much danger the
//! visible enemies pose this turn.
//!
//! Three ingredients, each a ratio against our own strength:
//! relative defense (hp+armor), relative level, and the damage actually
//! taken last turn. Damage is weighted heaviest: incoming troops are a
//! fact, the rest is projection.

use rampart_core::GameSnapshot;

/// Compute the threat level for a snapshot. Always in `[0.0, 1.0]`;
/// exactly `0.0` when no enemy towers are visible.
pub fn compute_threat(snapshot: &GameSnapshot) -> f64 {
    if snapshot.enemy_towers.is_empty() {
        return 0.0;
    }
    let enemy_count = snapshot.enemy_towers.len() as f64;

    let avg_enemy_defense = snapshot
        .enemy_towers
        .iter()
        .map(|e| f64::from(e.defense()))
        .sum::<f64>()
        / enemy_count;
    let health_threat = avg_enemy_defense / f64::from(snapshot.own_defense().max(1));

    let avg_enemy_level = snapshot
        .enemy_towers
        .iter()
        .map(|e| f64::from(e.level))
        .sum::<f64>()
        / enemy_count;
    let level_threat = avg_enemy_level / f64::from(snapshot.player_tower.level.max(1));

    let damage_threat =
        f64::from(snapshot.incoming_damage()) / f64::from(snapshot.own_defense().max(50));

    (0.3 * health_threat + 0.3 * level_threat + 0.4 * damage_threat).min(1.0)
}
