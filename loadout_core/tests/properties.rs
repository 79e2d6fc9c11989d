//! Property tests for aggregation and rounding

use loadout_core::prelude::*;
use proptest::prelude::*;

const KEYWORDS: &[&str] = &[
    "Damage",
    "Critical Chance",
    "Critical Damage",
    "Status Chance",
    "Fire Rate",
    "Multishot",
    "Magazine Capacity",
    "Reload Speed",
    "Heat",
    "Cold",
    "Slash",
    "Melee Damage",
];

fn line_strategy() -> impl Strategy<Value = String> {
    (prop::sample::select(KEYWORDS), -300i32..=300).prop_map(|(keyword, pct)| format!("{pct:+}% {keyword}"))
}

fn slots_strategy(start: u32) -> impl Strategy<Value = Vec<EquippedSlot>> {
    prop::collection::vec(prop::collection::vec(line_strategy(), 1..3), 0..6).prop_map(move |texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, lines)| {
                let index = start + i as u32;
                EquippedSlot::with_modifier(index, Modifier::new(format!("m{index}"), vec![lines.join("\n")], 0))
            })
            .collect()
    })
}

fn weapon_strategy() -> impl Strategy<Value = BaseWeapon> {
    prop::collection::vec(0.0f64..200.0, 4).prop_map(|values| {
        let mut weapon = BaseWeapon::default();
        weapon.damage_by_type[DamageType::Impact.index()] = values[0];
        weapon.damage_by_type[DamageType::Slash.index()] = values[1];
        weapon.damage_by_type[DamageType::Heat.index()] = values[2];
        weapon.damage_by_type[DamageType::Viral.index()] = values[3];
        weapon.total_damage = values.iter().sum();
        weapon
    })
}

fn close(a: &StatEffects, b: &StatEffects) -> bool {
    EffectStat::all().iter().all(|stat| (a.get(*stat) - b.get(*stat)).abs() < 1e-9)
}

fn is_tenth(value: f64) -> bool {
    ((value * 10.0).round() - value * 10.0).abs() < 1e-6
}

proptest! {
    #[test]
    fn aggregation_is_idempotent(slots in slots_strategy(0), disposition in 0.5f64..1.55) {
        let first = aggregate_effects(&slots, disposition);
        let second = aggregate_effects(&slots, disposition);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn weapon_stats_are_repeatable(mut weapon in weapon_strategy(), slots in slots_strategy(0)) {
        weapon.critical_chance = 0.2;
        weapon.critical_multiplier = 2.0;
        weapon.magazine_size = 30.0;
        weapon.reload_time = 2.0;
        let first = compute_weapon_stats(&weapon, &slots);
        let second = compute_weapon_stats(&weapon, &slots);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn build_damage_is_repeatable(weapon in weapon_strategy(), slots in slots_strategy(0)) {
        let first = compute_build_damage(&weapon, &slots);
        let second = compute_build_damage(&weapon, &slots);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn aggregation_is_additive(a in slots_strategy(0), b in slots_strategy(100)) {
        let combined: Vec<EquippedSlot> = a.iter().chain(b.iter()).cloned().collect();
        let whole = aggregate_effects(&combined, 1.0);
        let parts = aggregate_effects(&a, 1.0) + aggregate_effects(&b, 1.0);
        prop_assert!(close(&whole, &parts));
    }

    #[test]
    fn riven_scaling_is_exact(value in 1u32..300, disposition in 0.5f64..1.55) {
        let mut riven = Modifier::new("riven", vec![], 8);
        riven.is_riven = true;
        let config = RivenConfig {
            polarity: "naramon".to_string(),
            positive: vec![RivenStat::new("Multishot", value as f64), RivenStat::new("Fire Rate", 10.0)],
            negative: None,
        };
        let slots = vec![EquippedSlot::with_modifier(0, riven).with_riven(config)];
        let unscaled = aggregate_effects(&slots, 1.0);
        let scaled = aggregate_effects(&slots, disposition);
        prop_assert!(close(&scaled, &unscaled.scaled(disposition)));
    }

    #[test]
    fn breakdown_is_rounded_and_positive(weapon in weapon_strategy(), slots in slots_strategy(0)) {
        let build = compute_build_damage(&weapon, &slots);
        for entry in &build.damage_breakdown {
            prop_assert!(entry.value > 0.0);
            prop_assert!(is_tenth(entry.value));
        }
        prop_assert!(is_tenth(build.total_damage));
    }

    #[test]
    fn normalized_values_are_rounded(value in -500.0f64..500.0, negative in any::<bool>()) {
        for weapon_type in ["primary", "secondary", "melee", "archgun", "unknown"] {
            let normalized = normalize_riven_value(value, "Made Up Stat", weapon_type, negative);
            prop_assert!(is_tenth(normalized));
            if negative {
                prop_assert!(normalized <= 0.0);
            } else {
                prop_assert!(normalized >= 0.0);
            }
        }
    }
}
