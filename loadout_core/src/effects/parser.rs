//! Description parser - turns modifier description text into StatEffects
//!
//! Each line is tested against `PATTERN_RULES` top to bottom and the first
//! rule that matches claims the line. A rule matches a signed percentage,
//! optional whitespace, an optional `<TAG>` markup token and then its
//! keyword, compared ASCII case-insensitively.

use super::{EffectStat, StatEffects};
use crate::item::Modifier;
use tracing::{debug, trace};

/// One `(matcher, accumulator)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    /// Text that must follow the percentage
    pub keyword: &'static str,
    /// Accumulator the captured value is added to
    pub stat: EffectStat,
    /// Reject matches followed by "to <faction>"
    pub skip_faction: bool,
}

const fn rule(keyword: &'static str, stat: EffectStat) -> PatternRule {
    PatternRule { keyword, stat, skip_faction: false }
}

/// Ordered rule list. Order matters: element and physical rules must claim
/// "+90% Heat Damage" before the generic Damage rule, and Melee Damage must
/// be tested before Damage.
pub const PATTERN_RULES: &[PatternRule] = &[
    rule("Critical Chance", EffectStat::CritChance),
    rule("Critical Damage", EffectStat::CritMultiplier),
    rule("Status Chance", EffectStat::StatusChance),
    rule("Status Duration", EffectStat::StatusDuration),
    rule("Fire Rate", EffectStat::FireRate),
    rule("Attack Speed", EffectStat::FireRate),
    rule("Multishot", EffectStat::Multishot),
    rule("Magazine Capacity", EffectStat::MagazineCapacity),
    rule("Reload Speed", EffectStat::ReloadSpeed),
    rule("Ammo Maximum", EffectStat::AmmoMaximum),
    rule("Punch Through", EffectStat::PunchThrough),
    rule("Projectile Speed", EffectStat::ProjectileSpeed),
    rule("Range", EffectStat::Range),
    rule("Impact", EffectStat::ImpactDamage),
    rule("Puncture", EffectStat::PunctureDamage),
    rule("Slash", EffectStat::SlashDamage),
    rule("Heat", EffectStat::HeatDamage),
    rule("Cold", EffectStat::ColdDamage),
    rule("Electricity", EffectStat::ElectricityDamage),
    rule("Toxin", EffectStat::ToxinDamage),
    rule("Melee Damage", EffectStat::MeleeDamage),
    PatternRule { keyword: "Damage", stat: EffectStat::BaseDamage, skip_faction: true },
    rule("Health", EffectStat::Health),
    rule("Shield Capacity", EffectStat::ShieldCapacity),
    rule("Armor", EffectStat::Armor),
    rule("Energy Max", EffectStat::EnergyMax),
    rule("Ability Strength", EffectStat::AbilityStrength),
    rule("Ability Duration", EffectStat::AbilityDuration),
    rule("Ability Efficiency", EffectStat::AbilityEfficiency),
    rule("Ability Range", EffectStat::AbilityRange),
    rule("Sprint Speed", EffectStat::SprintSpeed),
];

impl PatternRule {
    /// Percentage captured by this rule on `line`, if any
    pub fn capture(&self, line: &str) -> Option<f64> {
        percent_before(line, self.keyword, self.skip_faction)
    }
}

/// Find the first `<number>%` in `line` followed by `keyword`
pub(crate) fn percent_before(line: &str, keyword: &str, skip_faction: bool) -> Option<f64> {
    percent_match(line, keyword, skip_faction).map(|(_, value)| value)
}

/// Like `percent_before`, also returning the byte offset of the `%`
///
/// Shared with the elemental scan so both read description text the same way.
pub(crate) fn percent_match(line: &str, keyword: &str, skip_faction: bool) -> Option<(usize, f64)> {
    for (pos, _) in line.match_indices('%') {
        let Some(value) = number_ending_at(line, pos) else {
            continue;
        };

        let rest = skip_markup(&line[pos + 1..]);
        if !starts_with_ignore_case(rest, keyword) {
            continue;
        }

        let after = &rest[keyword.len()..];
        if skip_faction && is_faction_suffix(after) {
            continue;
        }

        return Some((pos, value));
    }
    None
}

/// Parse the signed decimal that ends right before byte `end`
fn number_ending_at(line: &str, end: usize) -> Option<f64> {
    let bytes = line.as_bytes();
    let mut start = end;
    while start > 0 && (bytes[start - 1].is_ascii_digit() || bytes[start - 1] == b'.') {
        start -= 1;
    }
    if start == end || !bytes[start..end].iter().any(u8::is_ascii_digit) {
        return None;
    }
    if start > 0 && (bytes[start - 1] == b'+' || bytes[start - 1] == b'-') {
        start -= 1;
    }
    line[start..end].parse::<f64>().ok()
}

/// Skip whitespace and one optional `<...>` tag
fn skip_markup(text: &str) -> &str {
    let text = text.trim_start();
    if let Some(tagged) = text.strip_prefix('<') {
        if let Some(close) = tagged.find('>') {
            if close > 0 {
                return tagged[close + 1..].trim_start();
            }
        }
    }
    text
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(prefix))
}

/// True for "<whitespace>to<whitespace>..." (e.g. "Damage to Grineer")
fn is_faction_suffix(after: &str) -> bool {
    let trimmed = after.trim_start();
    if trimmed.len() == after.len() {
        return false;
    }
    starts_with_ignore_case(trimmed, "to")
        && trimmed[2..].chars().next().map_or(false, char::is_whitespace)
}

/// Parse one description line; unmatched lines yield `None`
pub fn parse_line(line: &str) -> Option<(EffectStat, f64)> {
    PATTERN_RULES
        .iter()
        .find_map(|rule| rule.capture(line).map(|value| (rule.stat, value / 100.0)))
}

/// Parse a whole description; values from multiple lines accumulate
pub fn parse_description(text: &str) -> StatEffects {
    let mut effects = StatEffects::new();
    for line in text.lines() {
        match parse_line(line) {
            Some((stat, value)) => effects.add_stat(stat, value),
            None => trace!(line, "description line contributes no stat"),
        }
    }
    effects
}

/// Parse a modifier at the given rank (clamped to its fusion limit)
pub fn parse_modifier(modifier: &Modifier, rank: u32) -> StatEffects {
    let rank = modifier.clamp_rank(rank);
    match modifier.description_for_rank(rank) {
        Some(text) => parse_description(text),
        None => {
            debug!(modifier = %modifier.id, rank, "no description text, using zero effects");
            StatEffects::new()
        }
    }
}
