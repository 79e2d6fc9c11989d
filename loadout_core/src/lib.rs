//! loadout_core - Mod effect aggregation and damage composition for loadouts
//!
//! This library provides:
//! - Description parsing: modifier text -> StatEffects
//! - Effect aggregation across equipped slots, with Riven disposition scaling
//! - Elemental composition: per-type damage breakdown of a modded weapon
//! - Weapon stat calculation: modded stats, burst and sustained DPS
//! - Riven baselines and validation

pub mod config;
pub mod damage;
pub mod effects;
pub mod item;
pub mod prelude;
pub mod riven;
pub mod source;
pub mod types;
pub mod weapon;

// Re-export core types for convenience
pub use config::ConfigError;
pub use damage::{compute_build_damage, BuildDamage, DamageEntry};
pub use effects::{aggregate_effects, parse_description, parse_modifier, EffectStat, StatEffects};
pub use item::{BaseWeapon, FireMode, Modifier};
pub use riven::{normalize_riven_value, validate_riven_config, RivenConfig, RivenError, RivenStat};
pub use source::{EffectSource, EquippedSlot, SlotSource};
pub use types::{DamageType, Element, Polarity, SlotType, WeaponType};
pub use weapon::{compute_weapon_stats, WeaponCalcResult, WeaponStats};
