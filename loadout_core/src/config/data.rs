//! Weapon and modifier record loading

use super::ConfigError;
use crate::item::{BaseWeapon, FireMode, Modifier};
use crate::types::{DamageType, DAMAGE_TYPE_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Weapon entry as written in TOML: damage keyed by type name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub name: String,
    /// Damage per type, keyed by type name (e.g. "impact", "shield_drain")
    #[serde(default)]
    pub damage: HashMap<String, f64>,
    #[serde(default)]
    pub critical_chance: f64,
    #[serde(default = "default_one")]
    pub critical_multiplier: f64,
    #[serde(default)]
    pub status_chance: f64,
    #[serde(default = "default_one")]
    pub fire_rate: f64,
    #[serde(default = "default_one")]
    pub multishot: f64,
    #[serde(default)]
    pub magazine_size: f64,
    #[serde(default)]
    pub reload_time: f64,
    #[serde(default)]
    pub range: Option<f64>,
    #[serde(default)]
    pub fire_modes: Vec<FireMode>,
    #[serde(default = "default_one")]
    pub riven_disposition: f64,
}

fn default_one() -> f64 {
    1.0
}

impl WeaponRecord {
    /// Convert to a `BaseWeapon`, deriving the damage array and total
    pub fn into_weapon(self) -> Result<BaseWeapon, ConfigError> {
        let mut damage_by_type = [0.0; DAMAGE_TYPE_COUNT];
        for (type_name, value) in &self.damage {
            let damage_type = DamageType::parse(type_name).ok_or_else(|| {
                ConfigError::ValidationError(format!(
                    "weapon '{}' has unknown damage type '{}'",
                    self.name, type_name
                ))
            })?;
            if !value.is_finite() || *value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "weapon '{}' has invalid {} damage: {}",
                    self.name, damage_type, value
                )));
            }
            damage_by_type[damage_type.index()] = *value;
        }
        if self.riven_disposition <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "weapon '{}' has non-positive riven disposition",
                self.name
            )));
        }

        Ok(BaseWeapon {
            name: self.name,
            total_damage: damage_by_type.iter().sum(),
            damage_by_type,
            critical_chance: self.critical_chance,
            critical_multiplier: self.critical_multiplier,
            status_chance: self.status_chance,
            fire_rate: self.fire_rate,
            multishot: self.multishot,
            magazine_size: self.magazine_size,
            reload_time: self.reload_time,
            range: self.range,
            fire_modes: self.fire_modes,
            riven_disposition: self.riven_disposition,
        })
    }
}

/// Container for weapon records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponsConfig {
    #[serde(rename = "weapons")]
    pub weapons: Vec<WeaponRecord>,
}

/// Container for modifier records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifiersConfig {
    #[serde(rename = "modifiers")]
    pub modifiers: Vec<Modifier>,
}

fn index_weapons(config: WeaponsConfig) -> Result<HashMap<String, BaseWeapon>, ConfigError> {
    let mut map = HashMap::new();
    for record in config.weapons {
        let weapon = record.into_weapon()?;
        map.insert(weapon.name.clone(), weapon);
    }
    Ok(map)
}

fn index_modifiers(config: ModifiersConfig) -> HashMap<String, Modifier> {
    config
        .modifiers
        .into_iter()
        .map(|modifier| (modifier.id.clone(), modifier))
        .collect()
}

/// Load weapon records from a TOML file, keyed by name
pub fn load_weapon_configs(path: &Path) -> Result<HashMap<String, BaseWeapon>, ConfigError> {
    index_weapons(super::load_toml(path)?)
}

/// Load weapon records from a TOML string, keyed by name
pub fn parse_weapon_configs(content: &str) -> Result<HashMap<String, BaseWeapon>, ConfigError> {
    index_weapons(super::parse_toml(content)?)
}

/// Load modifier records from a TOML file, keyed by id
pub fn load_modifier_configs(path: &Path) -> Result<HashMap<String, Modifier>, ConfigError> {
    Ok(index_modifiers(super::load_toml(path)?))
}

/// Load modifier records from a TOML string, keyed by id
pub fn parse_modifier_configs(content: &str) -> Result<HashMap<String, Modifier>, ConfigError> {
    Ok(index_modifiers(super::parse_toml(content)?))
}

/// Parse a JSON array of `BaseWeapon` records as produced upstream
pub fn parse_weapon_json(content: &str) -> Result<Vec<BaseWeapon>, ConfigError> {
    super::parse_json(content)
}
