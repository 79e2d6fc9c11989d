//! Riven modifiers - user-configured stats, baselines and validation

mod normalize;
mod validate;

pub use normalize::{normalize_riven_value, normalize_value};
pub use validate::validate_riven_config;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One user-entered Riven stat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RivenStat {
    /// Stat name as shown in-game, e.g. "Critical Chance"
    pub stat: String,
    /// Magnitude in percent
    pub value: f64,
    #[serde(default)]
    pub is_negative: bool,
}

impl RivenStat {
    pub fn new(stat: impl Into<String>, value: f64) -> Self {
        RivenStat { stat: stat.into(), value, is_negative: false }
    }

    pub fn negative(stat: impl Into<String>, value: f64) -> Self {
        RivenStat { stat: stat.into(), value, is_negative: true }
    }

    pub fn is_empty(&self) -> bool {
        self.stat.trim().is_empty()
    }

    /// Description line for this stat, e.g. "-20.5% Reload Speed"
    pub fn render(&self) -> String {
        let sign = if self.is_negative || self.value < 0.0 { '-' } else { '+' };
        format!("{}{}% {}", sign, self.value.abs(), self.stat.trim())
    }
}

/// User configuration of a Riven modifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RivenConfig {
    pub polarity: String,
    #[serde(default)]
    pub positive: Vec<RivenStat>,
    #[serde(default)]
    pub negative: Option<RivenStat>,
}

impl RivenConfig {
    /// Non-empty stats, positives first
    pub fn stats(&self) -> impl Iterator<Item = &RivenStat> {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .filter(|stat| !stat.is_empty())
    }

    /// Description text built from the configured stats; `None` if there are none
    pub fn render_description(&self) -> Option<String> {
        let lines: Vec<String> = self.stats().map(RivenStat::render).collect();
        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

/// Why a Riven configuration was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RivenError {
    #[error("invalid polarity: {0}")]
    InvalidPolarity(String),
    #[error("a riven needs 2 or 3 positive stats, found {0}")]
    InvalidPositiveCount(usize),
    #[error("stat appears more than once: {0}")]
    DuplicateStat(String),
}
