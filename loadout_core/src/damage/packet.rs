//! Damage breakdown output types

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Damage of a single type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageEntry {
    pub damage_type: DamageType,
    pub value: f64,
}

impl DamageEntry {
    pub fn new(damage_type: DamageType, value: f64) -> Self {
        DamageEntry { damage_type, value }
    }
}

/// Accumulate `value` into `entries`, merging with an existing entry of the
/// same type so first-seen order is kept
pub fn add_damage(entries: &mut Vec<DamageEntry>, damage_type: DamageType, value: f64) {
    if let Some(existing) = entries.iter_mut().find(|e| e.damage_type == damage_type) {
        existing.value += value;
    } else {
        entries.push(DamageEntry::new(damage_type, value));
    }
}

/// Round every entry and drop the ones that end up non-positive
pub fn finalize_entries(entries: Vec<DamageEntry>) -> Vec<DamageEntry> {
    entries
        .into_iter()
        .map(|e| DamageEntry::new(e.damage_type, round_to_tenth(e.value)))
        .filter(|e| e.value > 0.0)
        .collect()
}

/// Per-type damage of a modded build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildDamage {
    /// Sum of `damage_breakdown`, rounded to one decimal
    pub total_damage: f64,
    pub damage_breakdown: Vec<DamageEntry>,
    /// Secondary elements built into the weapon, after base damage scaling
    pub innate_secondary: Vec<DamageEntry>,
}

impl BuildDamage {
    /// Build from finalized entries, deriving the total
    pub fn new(damage_breakdown: Vec<DamageEntry>, innate_secondary: Vec<DamageEntry>) -> Self {
        let total: f64 = damage_breakdown.iter().map(|e| e.value).sum();
        BuildDamage {
            total_damage: round_to_tenth(total),
            damage_breakdown,
            innate_secondary,
        }
    }

    /// Damage of one type (0 if absent)
    pub fn damage_of_type(&self, damage_type: DamageType) -> f64 {
        self.damage_breakdown
            .iter()
            .find(|e| e.damage_type == damage_type)
            .map_or(0.0, |e| e.value)
    }
}
