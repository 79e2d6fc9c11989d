//! Riven baseline tables

use super::ConfigError;
use crate::types::WeaponType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

/// Canonical Riven stat magnitudes per weapon type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RivenBaselines {
    #[serde(default)]
    pub primary: HashMap<String, f64>,
    #[serde(default)]
    pub secondary: HashMap<String, f64>,
    #[serde(default)]
    pub melee: HashMap<String, f64>,
    #[serde(default)]
    pub archgun: HashMap<String, f64>,
}

impl RivenBaselines {
    pub fn table(&self, weapon_type: WeaponType) -> &HashMap<String, f64> {
        match weapon_type {
            WeaponType::Primary => &self.primary,
            WeaponType::Secondary => &self.secondary,
            WeaponType::Melee => &self.melee,
            WeaponType::Archgun => &self.archgun,
        }
    }

    /// Baseline magnitude for a stat, matched case-insensitively
    pub fn get(&self, weapon_type: WeaponType, stat: &str) -> Option<f64> {
        let stat = stat.trim();
        let table = self.table(weapon_type);
        table.get(stat).copied().or_else(|| {
            table
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(stat))
                .map(|(_, value)| *value)
        })
    }

    /// Reject tables with non-finite or negative magnitudes
    fn validate(&self) -> Result<(), ConfigError> {
        for weapon_type in WeaponType::all() {
            for (stat, value) in self.table(*weapon_type) {
                if !value.is_finite() || *value < 0.0 {
                    return Err(ConfigError::ValidationError(format!(
                        "{} baseline for '{}' must be a non-negative number, got {}",
                        weapon_type.as_str(),
                        stat,
                        value
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Parse baseline tables from a TOML string
pub fn parse_riven_baselines(content: &str) -> Result<RivenBaselines, ConfigError> {
    let baselines: RivenBaselines = super::parse_toml(content)?;
    baselines.validate()?;
    Ok(baselines)
}

/// Built-in baseline tables, parsed on first use
pub fn riven_baselines() -> &'static RivenBaselines {
    static BASELINES: OnceLock<RivenBaselines> = OnceLock::new();
    BASELINES.get_or_init(|| {
        let toml = include_str!("../../config/riven_baselines.toml");
        parse_riven_baselines(toml).unwrap_or_else(|err| {
            warn!(%err, "built-in riven baselines failed to load, normalization disabled");
            RivenBaselines::default()
        })
    })
}
