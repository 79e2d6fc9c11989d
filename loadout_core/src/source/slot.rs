//! SlotSource - Effects from one equipped mod slot

use crate::effects::{parse_description, parse_modifier, StatEffects};
use crate::item::Modifier;
use crate::riven::RivenConfig;
use crate::source::EffectSource;
use crate::types::SlotType;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::trace;

/// One mod slot of a loadout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquippedSlot {
    /// Position in the loadout; defines aggregation and element order
    pub index: u32,
    #[serde(default)]
    pub slot_type: SlotType,
    #[serde(default)]
    pub modifier: Option<Modifier>,
    /// Requested rank; `None` means max rank
    #[serde(default)]
    pub rank: Option<u32>,
    /// Number of equipped pieces of the modifier's set
    #[serde(default)]
    pub set_rank: Option<u32>,
    /// User-entered stats for a Riven modifier
    #[serde(default)]
    pub riven_override: Option<RivenConfig>,
}

impl EquippedSlot {
    /// A general slot holding `modifier` at max rank
    pub fn with_modifier(index: u32, modifier: Modifier) -> Self {
        EquippedSlot {
            index,
            modifier: Some(modifier),
            ..Default::default()
        }
    }

    /// Builder-style rank setter
    pub fn at_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Builder-style slot type setter
    pub fn of_type(mut self, slot_type: SlotType) -> Self {
        self.slot_type = slot_type;
        self
    }

    /// Builder-style Riven override setter
    pub fn with_riven(mut self, config: RivenConfig) -> Self {
        self.riven_override = Some(config);
        self
    }

    pub fn is_riven(&self) -> bool {
        self.riven_override.is_some()
    }

    /// Rank used for parsing: requested rank (or max), clamped to the fusion limit
    pub fn effective_rank(&self) -> Option<u32> {
        self.modifier
            .as_ref()
            .map(|m| m.clamp_rank(self.rank.unwrap_or(m.fusion_limit)))
    }

    /// Description text this slot contributes
    ///
    /// A Riven override with stats replaces the record's text.
    pub fn description(&self) -> Option<Cow<'_, str>> {
        let modifier = self.modifier.as_ref()?;
        if let Some(rendered) = self.riven_override.as_ref().and_then(RivenConfig::render_description) {
            return Some(Cow::Owned(rendered));
        }
        let rank = self.effective_rank()?;
        modifier.description_for_rank(rank).map(Cow::Borrowed)
    }

    /// Unscaled effects of this slot
    pub fn effects(&self) -> StatEffects {
        let Some(modifier) = self.modifier.as_ref() else {
            return StatEffects::new();
        };
        match self.riven_override.as_ref().and_then(RivenConfig::render_description) {
            Some(rendered) => parse_description(&rendered),
            None => parse_modifier(modifier, self.rank.unwrap_or(modifier.fusion_limit)),
        }
    }
}

/// An equipped slot paired with the weapon's Riven disposition
pub struct SlotSource<'a> {
    pub slot: &'a EquippedSlot,
    pub disposition: f64,
}

impl<'a> SlotSource<'a> {
    pub fn new(slot: &'a EquippedSlot, disposition: f64) -> Self {
        SlotSource { slot, disposition }
    }
}

impl EffectSource for SlotSource<'_> {
    fn id(&self) -> &str {
        self.slot
            .modifier
            .as_ref()
            .map_or("", |modifier| modifier.id.as_str())
    }

    fn apply(&self, effects: &mut StatEffects) {
        if self.slot.modifier.is_none() {
            return;
        }

        let mut slot_effects = self.slot.effects();
        if self.slot.is_riven() && self.disposition != 1.0 {
            trace!(slot = self.slot.index, disposition = self.disposition, "scaling riven effects");
            slot_effects.scale(self.disposition);
        }
        *effects += slot_effects;
    }
}
