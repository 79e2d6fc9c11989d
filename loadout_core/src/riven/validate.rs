//! Structural validation of Riven configurations

use super::{RivenConfig, RivenError};
use crate::types::Polarity;
use std::collections::HashSet;

/// Check polarity, positive stat count and duplicate stats, in that order
pub fn validate_riven_config(config: &RivenConfig) -> Result<(), RivenError> {
    if Polarity::parse(&config.polarity).is_none() {
        return Err(RivenError::InvalidPolarity(config.polarity.clone()));
    }

    let positives = config.positive.iter().filter(|stat| !stat.is_empty()).count();
    if !(2..=3).contains(&positives) {
        return Err(RivenError::InvalidPositiveCount(positives));
    }

    let mut seen = HashSet::new();
    for stat in config.stats() {
        let key = stat.stat.trim().to_ascii_lowercase();
        if !seen.insert(key) {
            return Err(RivenError::DuplicateStat(stat.stat.trim().to_string()));
        }
    }

    Ok(())
}
