//! Damage composition - per-type breakdown of a modded weapon

mod elemental;
mod packet;

pub use elemental::{compose_damage, compute_build_damage};
pub use packet::{add_damage, finalize_entries, round_to_tenth, BuildDamage, DamageEntry};
