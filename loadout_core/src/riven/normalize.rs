//! Riven value normalization against canonical baselines

use crate::config::{riven_baselines, RivenBaselines};
use crate::damage::round_to_tenth;
use crate::types::WeaponType;
use tracing::debug;

/// Normalize a user-entered Riven magnitude
///
/// When `(stat, weapon_type)` has a baseline the baseline magnitude replaces
/// `value`; otherwise the entered magnitude is kept. The sign follows
/// `is_negative` and the result is rounded to one decimal.
pub fn normalize_value(
    value: f64,
    stat: &str,
    weapon_type: WeaponType,
    is_negative: bool,
    baselines: &RivenBaselines,
) -> f64 {
    let magnitude = baselines
        .get(weapon_type, stat)
        .unwrap_or_else(|| value.abs());
    let signed = if is_negative { -magnitude } else { magnitude };
    round_to_tenth(signed)
}

/// String-keyed form of `normalize_value` using the built-in baseline tables
///
/// Unknown weapon types keep the entered magnitude.
pub fn normalize_riven_value(value: f64, stat: &str, weapon_type: &str, is_negative: bool) -> f64 {
    match weapon_type.parse::<WeaponType>() {
        Ok(weapon_type) => normalize_value(value, stat, weapon_type, is_negative, riven_baselines()),
        Err(err) => {
            debug!(%err, "no baseline table, keeping entered value");
            let magnitude = value.abs();
            round_to_tenth(if is_negative { -magnitude } else { magnitude })
        }
    }
}
