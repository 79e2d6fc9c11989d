//! Effect aggregation across all equipped slots

use super::StatEffects;
use crate::source::{EffectSource, EquippedSlot, SlotSource};
use tracing::{debug, trace};

/// Sum the effects of every equipped slot
///
/// Slots are visited in ascending `index`. Riven slots are scaled by
/// `disposition` before they are added; the total is never clamped.
pub fn aggregate_effects(slots: &[EquippedSlot], disposition: f64) -> StatEffects {
    let mut ordered: Vec<&EquippedSlot> = slots.iter().collect();
    ordered.sort_by_key(|slot| slot.index);

    let mut total = StatEffects::new();
    for slot in ordered {
        let source = SlotSource::new(slot, disposition);
        trace!(slot = slot.index, source = source.id(), "applying slot");
        source.apply(&mut total);
    }

    debug!(
        slots = slots.len(),
        base_damage = total.base_damage,
        multishot = total.multishot,
        "aggregated slot effects"
    );
    total
}
