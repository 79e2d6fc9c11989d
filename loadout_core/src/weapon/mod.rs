//! Weapon stat calculation - base weapon + aggregated effects -> modded stats

mod calculation;

pub use calculation::{apply_effects, compute_weapon_stats, WeaponCalcResult};

use crate::item::BaseWeapon;
use serde::{Deserialize, Serialize};

/// The scalar weapon stats touched by modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Total damage per hit
    pub damage: f64,
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub status_chance: f64,
    /// Shots (or attacks) per second
    pub fire_rate: f64,
    pub multishot: f64,
    pub magazine_size: f64,
    /// Seconds
    pub reload_time: f64,
}

impl WeaponStats {
    /// Unmodded stats of a weapon
    pub fn from_weapon(weapon: &BaseWeapon) -> Self {
        WeaponStats {
            damage: weapon.total_damage,
            critical_chance: weapon.critical_chance,
            critical_multiplier: weapon.critical_multiplier,
            status_chance: weapon.status_chance,
            fire_rate: weapon.fire_rate,
            multishot: weapon.multishot,
            magazine_size: weapon.magazine_size,
            reload_time: weapon.reload_time,
        }
    }

    /// Expected damage multiplier from crits: `1 + cc * (cm - 1)`
    pub fn average_crit_multiplier(&self) -> f64 {
        1.0 + self.critical_chance * (self.critical_multiplier - 1.0)
    }
}
