//! Core enums shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of entries in a weapon's per-type damage array
pub const DAMAGE_TYPE_COUNT: usize = 20;

/// Damage types in the fixed order used by `BaseWeapon::damage_by_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    // Physical
    Impact,
    Puncture,
    Slash,
    // Primary elements
    Heat,
    Cold,
    Electricity,
    Toxin,
    // Secondary elements
    Blast,
    Radiation,
    Gas,
    Magnetic,
    Viral,
    Corrosive,
    // Other
    Void,
    Tau,
    Cinematic,
    ShieldDrain,
    HealthDrain,
    EnergyDrain,
    True,
}

impl DamageType {
    /// All damage types in array order
    pub fn all() -> &'static [DamageType; DAMAGE_TYPE_COUNT] {
        &[
            DamageType::Impact,
            DamageType::Puncture,
            DamageType::Slash,
            DamageType::Heat,
            DamageType::Cold,
            DamageType::Electricity,
            DamageType::Toxin,
            DamageType::Blast,
            DamageType::Radiation,
            DamageType::Gas,
            DamageType::Magnetic,
            DamageType::Viral,
            DamageType::Corrosive,
            DamageType::Void,
            DamageType::Tau,
            DamageType::Cinematic,
            DamageType::ShieldDrain,
            DamageType::HealthDrain,
            DamageType::EnergyDrain,
            DamageType::True,
        ]
    }

    /// Position of this type in the damage array
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_physical(self) -> bool {
        matches!(self, DamageType::Impact | DamageType::Puncture | DamageType::Slash)
    }

    pub fn is_primary_element(self) -> bool {
        self.as_element().is_some()
    }

    pub fn is_secondary_element(self) -> bool {
        matches!(
            self,
            DamageType::Blast
                | DamageType::Radiation
                | DamageType::Gas
                | DamageType::Magnetic
                | DamageType::Viral
                | DamageType::Corrosive
        )
    }

    /// The primary element this damage type represents, if any
    pub fn as_element(self) -> Option<Element> {
        match self {
            DamageType::Heat => Some(Element::Heat),
            DamageType::Cold => Some(Element::Cold),
            DamageType::Electricity => Some(Element::Electricity),
            DamageType::Toxin => Some(Element::Toxin),
            _ => None,
        }
    }

    /// Look up a damage type by display or snake_case name
    pub fn parse(name: &str) -> Option<DamageType> {
        let wanted = name.trim().replace(['_', '-'], " ");
        DamageType::all()
            .iter()
            .copied()
            .find(|dt| dt.name().eq_ignore_ascii_case(&wanted))
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            DamageType::Impact => "Impact",
            DamageType::Puncture => "Puncture",
            DamageType::Slash => "Slash",
            DamageType::Heat => "Heat",
            DamageType::Cold => "Cold",
            DamageType::Electricity => "Electricity",
            DamageType::Toxin => "Toxin",
            DamageType::Blast => "Blast",
            DamageType::Radiation => "Radiation",
            DamageType::Gas => "Gas",
            DamageType::Magnetic => "Magnetic",
            DamageType::Viral => "Viral",
            DamageType::Corrosive => "Corrosive",
            DamageType::Void => "Void",
            DamageType::Tau => "Tau",
            DamageType::Cinematic => "Cinematic",
            DamageType::ShieldDrain => "Shield Drain",
            DamageType::HealthDrain => "Health Drain",
            DamageType::EnergyDrain => "Energy Drain",
            DamageType::True => "True",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four primary elements, declared in combination priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Heat,
    Cold,
    Electricity,
    Toxin,
}

impl Element {
    /// Elements in priority order
    pub fn all() -> &'static [Element; 4] {
        &[Element::Heat, Element::Cold, Element::Electricity, Element::Toxin]
    }

    pub fn damage_type(self) -> DamageType {
        match self {
            Element::Heat => DamageType::Heat,
            Element::Cold => DamageType::Cold,
            Element::Electricity => DamageType::Electricity,
            Element::Toxin => DamageType::Toxin,
        }
    }

    /// Priority used when ordering innate elements (lower first)
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.damage_type().name()
    }

    /// Secondary element produced by combining two different primaries
    pub fn combine(self, other: Element) -> Option<DamageType> {
        use Element::*;
        match (self, other) {
            (Heat, Cold) | (Cold, Heat) => Some(DamageType::Blast),
            (Electricity, Toxin) | (Toxin, Electricity) => Some(DamageType::Corrosive),
            (Heat, Toxin) | (Toxin, Heat) => Some(DamageType::Gas),
            (Cold, Electricity) | (Electricity, Cold) => Some(DamageType::Magnetic),
            (Electricity, Heat) | (Heat, Electricity) => Some(DamageType::Radiation),
            (Cold, Toxin) | (Toxin, Cold) => Some(DamageType::Viral),
            _ => None,
        }
    }
}

/// Kind of mod slot on a loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    #[default]
    General,
    Aura,
    Stance,
    Exilus,
    Posture,
}

/// Weapon category used for Riven baseline lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Primary,
    Secondary,
    Melee,
    Archgun,
}

impl WeaponType {
    pub fn all() -> &'static [WeaponType] {
        &[
            WeaponType::Primary,
            WeaponType::Secondary,
            WeaponType::Melee,
            WeaponType::Archgun,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponType::Primary => "primary",
            WeaponType::Secondary => "secondary",
            WeaponType::Melee => "melee",
            WeaponType::Archgun => "archgun",
        }
    }
}

/// Error for unrecognised weapon type names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown weapon type: {0}")]
pub struct ParseWeaponTypeError(pub String);

impl FromStr for WeaponType {
    type Err = ParseWeaponTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "rifle" | "shotgun" => Ok(WeaponType::Primary),
            "secondary" | "pistol" => Ok(WeaponType::Secondary),
            "melee" => Ok(WeaponType::Melee),
            "archgun" | "arch-gun" => Ok(WeaponType::Archgun),
            _ => Err(ParseWeaponTypeError(s.to_string())),
        }
    }
}

/// Riven mod polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Madurai,
    Vazarin,
    Naramon,
}

impl Polarity {
    /// Parse a polarity from either its name or its export code
    pub fn parse(s: &str) -> Option<Polarity> {
        match s.trim().to_ascii_lowercase().as_str() {
            "madurai" | "ap_attack" => Some(Polarity::Madurai),
            "vazarin" | "ap_defense" => Some(Polarity::Vazarin),
            "naramon" | "ap_tactic" => Some(Polarity::Naramon),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_type_ordering() {
        for (i, dt) in DamageType::all().iter().enumerate() {
            assert_eq!(dt.index(), i);
        }
        assert_eq!(DamageType::True.index(), DAMAGE_TYPE_COUNT - 1);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(DamageType::parse("impact"), Some(DamageType::Impact));
        assert_eq!(DamageType::parse("shield_drain"), Some(DamageType::ShieldDrain));
        assert_eq!(DamageType::parse("Health Drain"), Some(DamageType::HealthDrain));
        assert_eq!(DamageType::parse("fire"), None);
    }

    #[test]
    fn test_type_categories() {
        assert!(DamageType::Slash.is_physical());
        assert!(DamageType::Toxin.is_primary_element());
        assert!(DamageType::Viral.is_secondary_element());
        assert!(!DamageType::Void.is_physical());
        assert!(!DamageType::Void.is_primary_element());
        assert!(!DamageType::Void.is_secondary_element());
    }

    #[test]
    fn test_combination_is_symmetric() {
        for a in Element::all() {
            for b in Element::all() {
                assert_eq!(a.combine(*b), b.combine(*a));
            }
        }
        assert_eq!(Element::Heat.combine(Element::Heat), None);
        assert_eq!(Element::Heat.combine(Element::Cold), Some(DamageType::Blast));
        assert_eq!(Element::Electricity.combine(Element::Heat), Some(DamageType::Radiation));
    }

    #[test]
    fn test_weapon_type_from_str() {
        assert_eq!("Primary".parse::<WeaponType>(), Ok(WeaponType::Primary));
        assert_eq!("arch-gun".parse::<WeaponType>(), Ok(WeaponType::Archgun));
        assert!("sentinel".parse::<WeaponType>().is_err());
    }

    #[test]
    fn test_polarity_parse() {
        assert_eq!(Polarity::parse("AP_ATTACK"), Some(Polarity::Madurai));
        assert_eq!(Polarity::parse("naramon"), Some(Polarity::Naramon));
        assert_eq!(Polarity::parse("zenurik"), None);
    }
}
