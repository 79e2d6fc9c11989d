//! StatEffects - Summed stat bonuses from equipped modifiers

mod aggregator;
pub(crate) mod parser;

pub use aggregator::aggregate_effects;
pub use parser::{parse_description, parse_line, parse_modifier, PatternRule, PATTERN_RULES};

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Names one accumulator in `StatEffects`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectStat {
    // Weapon
    BaseDamage,
    MeleeDamage,
    CritChance,
    CritMultiplier,
    StatusChance,
    StatusDuration,
    FireRate,
    Multishot,
    MagazineCapacity,
    ReloadSpeed,
    AmmoMaximum,
    PunchThrough,
    ProjectileSpeed,
    Range,
    // Physical
    ImpactDamage,
    PunctureDamage,
    SlashDamage,
    // Elemental
    HeatDamage,
    ColdDamage,
    ElectricityDamage,
    ToxinDamage,
    // Character
    Health,
    ShieldCapacity,
    Armor,
    EnergyMax,
    AbilityStrength,
    AbilityDuration,
    AbilityEfficiency,
    AbilityRange,
    SprintSpeed,
}

impl EffectStat {
    pub fn all() -> &'static [EffectStat] {
        use EffectStat::*;
        &[
            BaseDamage,
            MeleeDamage,
            CritChance,
            CritMultiplier,
            StatusChance,
            StatusDuration,
            FireRate,
            Multishot,
            MagazineCapacity,
            ReloadSpeed,
            AmmoMaximum,
            PunchThrough,
            ProjectileSpeed,
            Range,
            ImpactDamage,
            PunctureDamage,
            SlashDamage,
            HeatDamage,
            ColdDamage,
            ElectricityDamage,
            ToxinDamage,
            Health,
            ShieldCapacity,
            Armor,
            EnergyMax,
            AbilityStrength,
            AbilityDuration,
            AbilityEfficiency,
            AbilityRange,
            SprintSpeed,
        ]
    }
}

/// Additive stat bonuses, each a fraction (0.9 = +90%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatEffects {
    // === Weapon ===
    pub base_damage: f64,
    pub melee_damage: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub status_chance: f64,
    pub status_duration: f64,
    pub fire_rate: f64,
    pub multishot: f64,
    pub magazine_capacity: f64,
    pub reload_speed: f64,
    pub ammo_maximum: f64,
    pub punch_through: f64,
    pub projectile_speed: f64,
    pub range: f64,

    // === Physical ===
    pub impact_damage: f64,
    pub puncture_damage: f64,
    pub slash_damage: f64,

    // === Elemental ===
    pub heat_damage: f64,
    pub cold_damage: f64,
    pub electricity_damage: f64,
    pub toxin_damage: f64,

    // === Character ===
    pub health: f64,
    pub shield_capacity: f64,
    pub armor: f64,
    pub energy_max: f64,
    pub ability_strength: f64,
    pub ability_duration: f64,
    pub ability_efficiency: f64,
    pub ability_range: f64,
    pub sprint_speed: f64,
}

impl StatEffects {
    /// Create a zeroed effect vector
    pub fn new() -> Self {
        StatEffects::default()
    }

    pub fn get(&self, stat: EffectStat) -> f64 {
        match stat {
            EffectStat::BaseDamage => self.base_damage,
            EffectStat::MeleeDamage => self.melee_damage,
            EffectStat::CritChance => self.crit_chance,
            EffectStat::CritMultiplier => self.crit_multiplier,
            EffectStat::StatusChance => self.status_chance,
            EffectStat::StatusDuration => self.status_duration,
            EffectStat::FireRate => self.fire_rate,
            EffectStat::Multishot => self.multishot,
            EffectStat::MagazineCapacity => self.magazine_capacity,
            EffectStat::ReloadSpeed => self.reload_speed,
            EffectStat::AmmoMaximum => self.ammo_maximum,
            EffectStat::PunchThrough => self.punch_through,
            EffectStat::ProjectileSpeed => self.projectile_speed,
            EffectStat::Range => self.range,
            EffectStat::ImpactDamage => self.impact_damage,
            EffectStat::PunctureDamage => self.puncture_damage,
            EffectStat::SlashDamage => self.slash_damage,
            EffectStat::HeatDamage => self.heat_damage,
            EffectStat::ColdDamage => self.cold_damage,
            EffectStat::ElectricityDamage => self.electricity_damage,
            EffectStat::ToxinDamage => self.toxin_damage,
            EffectStat::Health => self.health,
            EffectStat::ShieldCapacity => self.shield_capacity,
            EffectStat::Armor => self.armor,
            EffectStat::EnergyMax => self.energy_max,
            EffectStat::AbilityStrength => self.ability_strength,
            EffectStat::AbilityDuration => self.ability_duration,
            EffectStat::AbilityEfficiency => self.ability_efficiency,
            EffectStat::AbilityRange => self.ability_range,
            EffectStat::SprintSpeed => self.sprint_speed,
        }
    }

    fn slot_mut(&mut self, stat: EffectStat) -> &mut f64 {
        match stat {
            EffectStat::BaseDamage => &mut self.base_damage,
            EffectStat::MeleeDamage => &mut self.melee_damage,
            EffectStat::CritChance => &mut self.crit_chance,
            EffectStat::CritMultiplier => &mut self.crit_multiplier,
            EffectStat::StatusChance => &mut self.status_chance,
            EffectStat::StatusDuration => &mut self.status_duration,
            EffectStat::FireRate => &mut self.fire_rate,
            EffectStat::Multishot => &mut self.multishot,
            EffectStat::MagazineCapacity => &mut self.magazine_capacity,
            EffectStat::ReloadSpeed => &mut self.reload_speed,
            EffectStat::AmmoMaximum => &mut self.ammo_maximum,
            EffectStat::PunchThrough => &mut self.punch_through,
            EffectStat::ProjectileSpeed => &mut self.projectile_speed,
            EffectStat::Range => &mut self.range,
            EffectStat::ImpactDamage => &mut self.impact_damage,
            EffectStat::PunctureDamage => &mut self.puncture_damage,
            EffectStat::SlashDamage => &mut self.slash_damage,
            EffectStat::HeatDamage => &mut self.heat_damage,
            EffectStat::ColdDamage => &mut self.cold_damage,
            EffectStat::ElectricityDamage => &mut self.electricity_damage,
            EffectStat::ToxinDamage => &mut self.toxin_damage,
            EffectStat::Health => &mut self.health,
            EffectStat::ShieldCapacity => &mut self.shield_capacity,
            EffectStat::Armor => &mut self.armor,
            EffectStat::EnergyMax => &mut self.energy_max,
            EffectStat::AbilityStrength => &mut self.ability_strength,
            EffectStat::AbilityDuration => &mut self.ability_duration,
            EffectStat::AbilityEfficiency => &mut self.ability_efficiency,
            EffectStat::AbilityRange => &mut self.ability_range,
            EffectStat::SprintSpeed => &mut self.sprint_speed,
        }
    }

    /// Add a fractional bonus to one accumulator
    pub fn add_stat(&mut self, stat: EffectStat, value: f64) {
        *self.slot_mut(stat) += value;
    }

    /// Multiply every accumulator by `factor`
    pub fn scale(&mut self, factor: f64) {
        for stat in EffectStat::all() {
            *self.slot_mut(*stat) *= factor;
        }
    }

    /// Copy of this vector with every accumulator multiplied by `factor`
    pub fn scaled(mut self, factor: f64) -> Self {
        self.scale(factor);
        self
    }

    /// True if every accumulator is zero
    pub fn is_zero(&self) -> bool {
        EffectStat::all().iter().all(|stat| self.get(*stat) == 0.0)
    }

    /// Total damage bonus for a weapon; melee damage only counts on melee weapons
    pub fn damage_bonus(&self, is_melee: bool) -> f64 {
        if is_melee {
            self.base_damage + self.melee_damage
        } else {
            self.base_damage
        }
    }

    /// The subset consumed by damage composition
    pub fn damage_bonuses(&self, is_melee: bool) -> DamageBonuses {
        DamageBonuses {
            base_damage: self.damage_bonus(is_melee),
            impact_damage: self.impact_damage,
            puncture_damage: self.puncture_damage,
            slash_damage: self.slash_damage,
        }
    }
}

impl AddAssign for StatEffects {
    fn add_assign(&mut self, other: StatEffects) {
        for stat in EffectStat::all() {
            self.add_stat(*stat, other.get(*stat));
        }
    }
}

impl Add for StatEffects {
    type Output = StatEffects;

    fn add(mut self, other: StatEffects) -> StatEffects {
        self += other;
        self
    }
}

/// Damage multipliers used by the elemental compositor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageBonuses {
    pub base_damage: f64,
    pub impact_damage: f64,
    pub puncture_damage: f64,
    pub slash_damage: f64,
}

impl DamageBonuses {
    /// Physical-specific bonus for a damage type (0 for non-physical)
    pub fn physical_bonus(&self, damage_type: crate::types::DamageType) -> f64 {
        use crate::types::DamageType;
        match damage_type {
            DamageType::Impact => self.impact_damage,
            DamageType::Puncture => self.puncture_damage,
            DamageType::Slash => self.slash_damage,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        assert!(StatEffects::new().is_zero());
    }

    #[test]
    fn test_get_add_roundtrip() {
        let mut effects = StatEffects::new();
        for (i, stat) in EffectStat::all().iter().enumerate() {
            effects.add_stat(*stat, i as f64);
        }
        for (i, stat) in EffectStat::all().iter().enumerate() {
            assert!((effects.get(*stat) - i as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_add_is_componentwise() {
        let mut a = StatEffects::new();
        a.base_damage = 0.9;
        a.reload_speed = -0.2;
        let mut b = StatEffects::new();
        b.base_damage = 0.3;
        b.multishot = 0.6;

        let sum = a + b;
        assert!((sum.base_damage - 1.2).abs() < 1e-12);
        assert!((sum.reload_speed + 0.2).abs() < 1e-12);
        assert!((sum.multishot - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_add_stat_alongside_operator() {
        let mut a = StatEffects::new();
        a.add_stat(EffectStat::FireRate, 0.25);
        a.add_stat(EffectStat::FireRate, 0.15);
        let mut b = StatEffects::new();
        b.add_stat(EffectStat::Armor, 1.0);

        let sum = a + b;
        assert!((sum.fire_rate - 0.4).abs() < 1e-12);
        assert!((sum.armor - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale() {
        let mut effects = StatEffects::new();
        effects.crit_chance = 1.0;
        effects.reload_speed = -0.5;
        let scaled = effects.scaled(1.3);
        assert!((scaled.crit_chance - 1.3).abs() < 1e-12);
        assert!((scaled.reload_speed + 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_melee_damage_only_counts_for_melee() {
        let mut effects = StatEffects::new();
        effects.base_damage = 0.5;
        effects.melee_damage = 1.2;
        assert!((effects.damage_bonus(false) - 0.5).abs() < 1e-12);
        assert!((effects.damage_bonus(true) - 1.7).abs() < 1e-12);
    }
}
