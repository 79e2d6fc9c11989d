//! Elemental composition - turning base damage plus elemental mods into a
//! final per-type breakdown
//!
//! Primary elements from mods are sequenced by slot index, innate elements
//! merge into mod elements of the same type, and the merged sequence is
//! combined two at a time by position.

use super::packet::{add_damage, finalize_entries, BuildDamage, DamageEntry};
use crate::effects::{aggregate_effects, parser::percent_match, DamageBonuses};
use crate::item::BaseWeapon;
use crate::source::EquippedSlot;
use crate::types::{DamageType, Element, SlotType, DAMAGE_TYPE_COUNT};
use tracing::trace;

/// One primary element queued for combination
#[derive(Debug, Clone, Copy, PartialEq)]
struct ElementContribution {
    /// Slot the element came from (`None` for innate elements)
    slot_index: Option<u32>,
    element: Element,
    value: f64,
}

/// Primary elements built into the weapon, scaled by base damage, in
/// priority order
fn innate_elements(damage_by_type: &[f64; DAMAGE_TYPE_COUNT], base_bonus: f64) -> Vec<ElementContribution> {
    let mut innate: Vec<ElementContribution> = DamageType::all()
        .iter()
        .filter_map(|damage_type| {
            let element = damage_type.as_element()?;
            let base = damage_by_type[damage_type.index()];
            (base > 0.0).then(|| ElementContribution {
                slot_index: None,
                element,
                value: base * (1.0 + base_bonus),
            })
        })
        .collect();
    innate.sort_by_key(|c| c.element.priority());
    innate
}

/// Leftmost primary element phrase on a description line
fn scan_line(line: &str) -> Option<(Element, f64)> {
    Element::all()
        .iter()
        .filter_map(|element| {
            percent_match(line, element.name(), false).map(|(pos, pct)| (pos, *element, pct))
        })
        .min_by_key(|(pos, _, _)| *pos)
        .map(|(_, element, pct)| (element, pct))
}

/// Elements contributed by general-slot mods, sorted by slot index
fn mod_elements(
    slots: &[EquippedSlot],
    disposition: f64,
    element_base: f64,
) -> Vec<ElementContribution> {
    let mut found = Vec::new();
    for slot in slots.iter().filter(|s| s.slot_type == SlotType::General) {
        let Some(text) = slot.description() else {
            continue;
        };
        let scale = if slot.is_riven() { disposition } else { 1.0 };
        for (element, pct) in text.lines().filter_map(scan_line) {
            found.push(ElementContribution {
                slot_index: Some(slot.index),
                element,
                value: pct / 100.0 * element_base * scale,
            });
        }
    }
    found.sort_by_key(|c| c.slot_index);
    found
}

/// Collapse same-element mod contributions into their first occurrence, then
/// fold innate elements into matching mod elements and append the rest
fn merge_elements(
    mod_elements: Vec<ElementContribution>,
    innate: Vec<ElementContribution>,
) -> Vec<ElementContribution> {
    let mut merged: Vec<ElementContribution> = Vec::new();
    for contribution in mod_elements {
        match merged.iter_mut().find(|m| m.element == contribution.element) {
            Some(existing) => existing.value += contribution.value,
            None => merged.push(contribution),
        }
    }

    let mut consumed = vec![false; innate.len()];
    for entry in merged.iter_mut() {
        if let Some(pos) = innate
            .iter()
            .enumerate()
            .position(|(i, c)| !consumed[i] && c.element == entry.element)
        {
            entry.value += innate[pos].value;
            consumed[pos] = true;
        }
    }

    merged.extend(
        innate
            .into_iter()
            .zip(consumed)
            .filter(|(_, used)| !used)
            .map(|(contribution, _)| contribution),
    );
    merged
}

/// Walk the sequence two at a time, combining compatible neighbours
fn combine_elements(sequence: &[ElementContribution]) -> Vec<DamageEntry> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < sequence.len() {
        let current = sequence[i];
        let combined = sequence
            .get(i + 1)
            .and_then(|next| current.element.combine(next.element).map(|dt| (dt, next.value)));

        match combined {
            Some((damage_type, next_value)) => {
                trace!(?damage_type, first = ?current.element, "combined elements");
                out.push(DamageEntry::new(damage_type, current.value + next_value));
                i += 2;
            }
            None => {
                trace!(element = ?current.element, innate = current.slot_index.is_none(), "element left single");
                out.push(DamageEntry::new(current.element.damage_type(), current.value));
                i += 1;
            }
        }
    }
    out
}

/// Compose the final damage breakdown
///
/// `total_damage` is the weapon's base total; elemental mods add their
/// percentage of it (after base damage scaling).
pub fn compose_damage(
    damage_by_type: &[f64; DAMAGE_TYPE_COUNT],
    slots: &[EquippedSlot],
    disposition: f64,
    bonuses: &DamageBonuses,
    total_damage: f64,
) -> BuildDamage {
    let base_mult = 1.0 + bonuses.base_damage;
    let mut entries: Vec<DamageEntry> = Vec::new();

    // Physical and other non-elemental types
    for damage_type in DamageType::all() {
        let base = damage_by_type[damage_type.index()];
        if base <= 0.0 || damage_type.is_primary_element() || damage_type.is_secondary_element() {
            continue;
        }
        let physical = if damage_type.is_physical() {
            bonuses.physical_bonus(*damage_type)
        } else {
            0.0
        };
        let value = base * base_mult * (1.0 + physical);
        add_damage(&mut entries, *damage_type, value);
    }

    // Secondary elements built into the weapon
    let mut innate_secondary = Vec::new();
    for damage_type in DamageType::all().iter().filter(|dt| dt.is_secondary_element()) {
        let base = damage_by_type[damage_type.index()];
        if base > 0.0 {
            add_damage(&mut entries, *damage_type, base * base_mult);
            add_damage(&mut innate_secondary, *damage_type, base * base_mult);
        }
    }

    let innate = innate_elements(damage_by_type, bonuses.base_damage);
    let from_mods = mod_elements(slots, disposition, total_damage * base_mult);
    let sequence = merge_elements(from_mods, innate);

    for entry in combine_elements(&sequence) {
        add_damage(&mut entries, entry.damage_type, entry.value);
    }

    BuildDamage::new(finalize_entries(entries), finalize_entries(innate_secondary))
}

/// Damage breakdown for a weapon with the given slots equipped
pub fn compute_build_damage(weapon: &BaseWeapon, slots: &[EquippedSlot]) -> BuildDamage {
    let effects = aggregate_effects(slots, weapon.riven_disposition);
    let bonuses = effects.damage_bonuses(weapon.is_melee());
    compose_damage(
        &weapon.damage_by_type,
        slots,
        weapon.riven_disposition,
        &bonuses,
        weapon.total_damage,
    )
}
