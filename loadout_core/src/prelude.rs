//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Records
pub use crate::item::{BaseWeapon, FireMode, Modifier};
pub use crate::source::EquippedSlot;
pub use crate::types::{DamageType, Element, SlotType, WeaponType};

// Effects
pub use crate::effects::{aggregate_effects, EffectStat, StatEffects};

// Damage and weapon stats
pub use crate::damage::{compute_build_damage, BuildDamage, DamageEntry};
pub use crate::weapon::{compute_weapon_stats, WeaponCalcResult};

// Riven
pub use crate::riven::{normalize_riven_value, validate_riven_config, RivenConfig, RivenError, RivenStat};
