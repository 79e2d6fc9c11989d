//! EffectSource - Trait and implementations for effect providers

mod slot;

pub use slot::{EquippedSlot, SlotSource};

use crate::effects::StatEffects;

/// Trait for anything that contributes to a StatEffects vector
pub trait EffectSource: Send + Sync {
    /// Identifier for this source (used in diagnostics)
    fn id(&self) -> &str;

    /// Add this source's effects to the running total
    fn apply(&self, effects: &mut StatEffects);
}
