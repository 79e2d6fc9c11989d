//! Throughput metrics for a modded weapon

use super::WeaponStats;
use crate::effects::{aggregate_effects, StatEffects};
use crate::item::BaseWeapon;
use crate::source::EquippedSlot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base and modded stats plus derived DPS figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponCalcResult {
    pub base: WeaponStats,
    pub modded: WeaponStats,
    /// Aggregated effects the modded stats were derived from
    pub effects: StatEffects,
    /// Expected damage of one trigger pull (or swing), crits included
    pub average_hit: f64,
    pub burst_dps: f64,
    /// DPS including reload downtime
    pub sustained_dps: f64,
    /// Expected status procs per second
    pub status_per_sec: f64,
    pub ammo_cost: f64,
    pub is_melee: bool,
}

/// Trim float noise so e.g. `30 * 1.3` doesn't ceil to 40
fn settle(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Apply an effect vector to base stats
pub fn apply_effects(base: &WeaponStats, effects: &StatEffects, is_melee: bool) -> WeaponStats {
    let reload_divisor = 1.0 + effects.reload_speed;
    let reload_time = if reload_divisor > 0.0 {
        base.reload_time / reload_divisor
    } else {
        debug!(reload_speed = effects.reload_speed, "non-positive reload divisor, reload unchanged");
        base.reload_time
    };

    WeaponStats {
        damage: base.damage * (1.0 + effects.damage_bonus(is_melee)),
        critical_chance: base.critical_chance * (1.0 + effects.crit_chance),
        critical_multiplier: base.critical_multiplier * (1.0 + effects.crit_multiplier),
        status_chance: base.status_chance * (1.0 + effects.status_chance),
        fire_rate: base.fire_rate * (1.0 + effects.fire_rate),
        multishot: base.multishot * (1.0 + effects.multishot),
        magazine_size: settle(base.magazine_size * (1.0 + effects.magazine_capacity)).ceil(),
        reload_time,
    }
}

/// Sustained DPS for a ranged weapon, folding reload time into the cycle
fn sustained_ranged_dps(burst_dps: f64, stats: &WeaponStats, ammo_cost: f64) -> f64 {
    let shots = settle(stats.magazine_size / ammo_cost).floor();
    if shots > 0.0 && stats.reload_time > 0.0 && stats.fire_rate > 0.0 {
        let fire_time = shots / stats.fire_rate;
        burst_dps * fire_time / (fire_time + stats.reload_time)
    } else {
        burst_dps
    }
}

/// Compute modded stats and throughput for a weapon with the given slots
pub fn compute_weapon_stats(weapon: &BaseWeapon, slots: &[EquippedSlot]) -> WeaponCalcResult {
    let is_melee = weapon.is_melee();
    let effects = aggregate_effects(slots, weapon.riven_disposition);
    let base = WeaponStats::from_weapon(weapon);
    let modded = apply_effects(&base, &effects, is_melee);
    let ammo_cost = weapon.ammo_cost();

    let avg_crit = modded.average_crit_multiplier();
    let (average_hit, burst_dps, sustained_dps) = if is_melee {
        let hit = modded.damage * avg_crit;
        let burst = hit * modded.fire_rate;
        (hit, burst, burst)
    } else {
        let hit = modded.damage * modded.multishot * avg_crit;
        let burst = hit * modded.fire_rate;
        (hit, burst, sustained_ranged_dps(burst, &modded, ammo_cost))
    };

    debug!(
        weapon = %weapon.name,
        average_hit,
        burst_dps,
        sustained_dps,
        "computed weapon stats"
    );

    WeaponCalcResult {
        base,
        modded,
        effects,
        average_hit,
        burst_dps,
        sustained_dps,
        status_per_sec: modded.status_chance * modded.multishot * modded.fire_rate,
        ammo_cost,
        is_melee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{FireMode, Modifier};
    use crate::types::DamageType;

    fn slot(index: u32, text: &str) -> EquippedSlot {
        EquippedSlot::with_modifier(index, Modifier::new(format!("m{index}"), vec![text.to_string()], 0))
    }

    fn rifle() -> BaseWeapon {
        let mut weapon = BaseWeapon {
            name: "Test Rifle".to_string(),
            critical_chance: 0.25,
            critical_multiplier: 2.0,
            ..Default::default()
        };
        weapon.damage_by_type[DamageType::Impact.index()] = 50.0;
        weapon.total_damage = 50.0;
        weapon
    }

    #[test]
    fn test_serration_scenario() {
        let result = compute_weapon_stats(&rifle(), &[slot(0, "+90% Damage")]);
        assert!((result.modded.damage - 95.0).abs() < 1e-9);
        assert!((result.modded.average_crit_multiplier() - 1.25).abs() < 1e-9);
        assert!((result.average_hit - 118.75).abs() < 1e-9);
        assert!((result.burst_dps - 118.75).abs() < 1e-9);
        assert!((result.sustained_dps - 118.75).abs() < 1e-9);
        assert!(!result.is_melee);
    }

    #[test]
    fn test_no_slots_matches_base() {
        let weapon = rifle();
        let result = compute_weapon_stats(&weapon, &[]);
        assert_eq!(result.base, result.modded);
        assert!(result.effects.is_zero());
        assert!((result.ammo_cost - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sustained_includes_reload() {
        let mut weapon = rifle();
        weapon.critical_chance = 0.0;
        weapon.fire_rate = 10.0;
        weapon.magazine_size = 20.0;
        weapon.reload_time = 2.0;
        let result = compute_weapon_stats(&weapon, &[]);
        // 20 shots over 2s of firing, then 2s reload
        assert!((result.burst_dps - 500.0).abs() < 1e-9);
        assert!((result.sustained_dps - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_ammo_cost_from_first_fire_mode() {
        let mut weapon = rifle();
        weapon.critical_chance = 0.0;
        weapon.magazine_size = 10.0;
        weapon.reload_time = 5.0;
        weapon.fire_modes = vec![
            FireMode { name: "Charged".to_string(), ammo_cost: Some(5.0) },
            FireMode { name: "Auto".to_string(), ammo_cost: Some(1.0) },
        ];
        let result = compute_weapon_stats(&weapon, &[]);
        assert!((result.ammo_cost - 5.0).abs() < f64::EPSILON);
        // 2 shots at 1/s -> 2s firing + 5s reload
        assert!((result.sustained_dps - 50.0 * 2.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_magazine_rounds_up() {
        let mut weapon = rifle();
        weapon.magazine_size = 30.0;
        let result = compute_weapon_stats(&weapon, &[slot(0, "+30% Magazine Capacity")]);
        assert!((result.modded.magazine_size - 39.0).abs() < f64::EPSILON);

        let result = compute_weapon_stats(&weapon, &[slot(0, "+25% Magazine Capacity")]);
        // 37.5 -> 38
        assert!((result.modded.magazine_size - 38.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reload_speed() {
        let mut weapon = rifle();
        weapon.reload_time = 3.0;
        let result = compute_weapon_stats(&weapon, &[slot(0, "+50% Reload Speed")]);
        assert!((result.modded.reload_time - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_reload_speed_slows_reload() {
        let mut weapon = rifle();
        weapon.reload_time = 3.0;
        let result = compute_weapon_stats(&weapon, &[slot(0, "-50% Reload Speed")]);
        assert!((result.modded.reload_time - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_reload_guard_keeps_base() {
        let mut weapon = rifle();
        weapon.reload_time = 3.0;
        let result = compute_weapon_stats(&weapon, &[slot(0, "-100% Reload Speed")]);
        assert!((result.modded.reload_time - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_melee_uses_melee_damage_and_ignores_multishot() {
        let mut weapon = rifle();
        weapon.range = Some(2.5);
        weapon.multishot = 3.0;
        weapon.critical_chance = 0.0;
        weapon.fire_rate = 1.2;
        weapon.magazine_size = 1.0;
        weapon.reload_time = 10.0;
        let result = compute_weapon_stats(&weapon, &[slot(0, "+100% Melee Damage"), slot(1, "+20% Damage")]);
        assert!(result.is_melee);
        // 50 * (1 + 1.0 melee + 0.2 damage)
        assert!((result.modded.damage - 110.0).abs() < 1e-9);
        assert!((result.average_hit - 110.0).abs() < 1e-9);
        assert!((result.burst_dps - 132.0).abs() < 1e-9);
        assert!((result.sustained_dps - result.burst_dps).abs() < f64::EPSILON);
    }

    #[test]
    fn test_melee_damage_ignored_on_ranged() {
        let result = compute_weapon_stats(&rifle(), &[slot(0, "+100% Melee Damage")]);
        assert!((result.modded.damage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_per_sec() {
        let mut weapon = rifle();
        weapon.status_chance = 0.2;
        weapon.fire_rate = 5.0;
        weapon.multishot = 2.0;
        let result = compute_weapon_stats(&weapon, &[slot(0, "+50% Status Chance")]);
        assert!((result.status_per_sec - 0.3 * 2.0 * 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_riven_disposition_applies() {
        use crate::riven::{RivenConfig, RivenStat};
        let mut weapon = rifle();
        weapon.riven_disposition = 1.5;
        let mut riven = Modifier::new("riven", vec![], 8);
        riven.is_riven = true;
        let config = RivenConfig {
            polarity: "madurai".to_string(),
            positive: vec![RivenStat::new("Critical Chance", 100.0), RivenStat::new("Multishot", 40.0)],
            negative: None,
        };
        let slots = vec![EquippedSlot::with_modifier(0, riven).with_riven(config)];
        let result = compute_weapon_stats(&weapon, &slots);
        assert!((result.modded.critical_chance - 0.25 * 2.5).abs() < 1e-9);
        assert!((result.modded.multishot - 1.6).abs() < 1e-9);
    }
}
