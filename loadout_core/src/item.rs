//! Reference records consumed by the engine
//!
//! Weapons and modifiers are produced upstream from the game's export files
//! and are treated as read-only here.

use crate::types::{DamageType, DAMAGE_TYPE_COUNT};
use serde::{Deserialize, Serialize};

/// An equippable modifier ("mod")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Description text per achievable rank, rank 0 first
    #[serde(default)]
    pub description_ranks: Option<Vec<String>>,
    /// Maximum rank
    #[serde(default)]
    pub fusion_limit: u32,
    #[serde(default)]
    pub is_riven: bool,
}

impl Modifier {
    /// Create a modifier with one description per rank
    pub fn new(id: impl Into<String>, description_ranks: Vec<String>, fusion_limit: u32) -> Self {
        Modifier {
            id: id.into(),
            name: String::new(),
            description_ranks: Some(description_ranks),
            fusion_limit,
            is_riven: false,
        }
    }

    /// Clamp a requested rank into `[0, fusion_limit]`
    pub fn clamp_rank(&self, rank: u32) -> u32 {
        rank.min(self.fusion_limit)
    }

    /// Description text for a rank, falling back to the highest available
    pub fn description_for_rank(&self, rank: u32) -> Option<&str> {
        let ranks = self.description_ranks.as_ref()?;
        let last = ranks.len().checked_sub(1)?;
        let idx = (rank as usize).min(last);
        ranks.get(idx).map(String::as_str)
    }
}

/// One firing behaviour of a weapon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireMode {
    #[serde(default)]
    pub name: String,
    /// Ammunition consumed per shot
    #[serde(default)]
    pub ammo_cost: Option<f64>,
}

/// Base (unmodded) weapon record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWeapon {
    #[serde(default)]
    pub name: String,
    /// Per-type damage, indexed by `DamageType::index`
    #[serde(default)]
    pub damage_by_type: [f64; DAMAGE_TYPE_COUNT],
    #[serde(default)]
    pub total_damage: f64,
    #[serde(default)]
    pub critical_chance: f64,
    #[serde(default = "default_one")]
    pub critical_multiplier: f64,
    #[serde(default)]
    pub status_chance: f64,
    #[serde(default = "default_one")]
    pub fire_rate: f64,
    #[serde(default = "default_one")]
    pub multishot: f64,
    #[serde(default)]
    pub magazine_size: f64,
    #[serde(default)]
    pub reload_time: f64,
    /// Melee reach; only melee records carry it
    #[serde(default)]
    pub range: Option<f64>,
    #[serde(default)]
    pub fire_modes: Vec<FireMode>,
    #[serde(default = "default_one")]
    pub riven_disposition: f64,
}

fn default_one() -> f64 {
    1.0
}

impl Default for BaseWeapon {
    fn default() -> Self {
        BaseWeapon {
            name: String::new(),
            damage_by_type: [0.0; DAMAGE_TYPE_COUNT],
            total_damage: 0.0,
            critical_chance: 0.0,
            critical_multiplier: 1.0,
            status_chance: 0.0,
            fire_rate: 1.0,
            multishot: 1.0,
            magazine_size: 0.0,
            reload_time: 0.0,
            range: None,
            fire_modes: Vec::new(),
            riven_disposition: 1.0,
        }
    }
}

impl BaseWeapon {
    pub fn is_melee(&self) -> bool {
        self.range.is_some()
    }

    /// Base damage of one type
    pub fn damage_of_type(&self, damage_type: DamageType) -> f64 {
        self.damage_by_type[damage_type.index()]
    }

    /// Ammo cost per shot from the first fire mode (default 1)
    pub fn ammo_cost(&self) -> f64 {
        self.fire_modes
            .first()
            .and_then(|mode| mode.ammo_cost)
            .filter(|cost| *cost > 0.0)
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_rank_fallback() {
        let modifier = Modifier::new(
            "serration",
            vec!["+15% Damage".to_string(), "+30% Damage".to_string()],
            10,
        );
        assert_eq!(modifier.description_for_rank(0), Some("+15% Damage"));
        assert_eq!(modifier.description_for_rank(10), Some("+30% Damage"));
        assert_eq!(modifier.clamp_rank(15), 10);
    }

    #[test]
    fn test_missing_description() {
        let mut modifier = Modifier::new("empty", vec![], 3);
        assert_eq!(modifier.description_for_rank(0), None);
        modifier.description_ranks = None;
        assert_eq!(modifier.description_for_rank(2), None);
    }

    #[test]
    fn test_ammo_cost_default() {
        let mut weapon = BaseWeapon::default();
        assert!((weapon.ammo_cost() - 1.0).abs() < f64::EPSILON);

        weapon.fire_modes.push(FireMode { name: "charged".to_string(), ammo_cost: Some(5.0) });
        weapon.fire_modes.push(FireMode { name: "alt".to_string(), ammo_cost: Some(2.0) });
        assert!((weapon.ammo_cost() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_melee_detection() {
        let mut weapon = BaseWeapon::default();
        assert!(!weapon.is_melee());
        weapon.range = Some(2.5);
        assert!(weapon.is_melee());
    }
}
