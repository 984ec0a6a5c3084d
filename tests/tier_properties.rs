//! Property tests for tier normalization.

use charge_tiers::{TierList, resolve, tiers::format_number};
use proptest::prelude::*;
use serde_json::{Value, json};

fn bound() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u32..100_000).prop_map(f64::from),
        (0u32..100_000).prop_map(|n| f64::from(n) / 100.0),
    ]
}

fn range_entries() -> impl Strategy<Value = Vec<(f64, Option<f64>, f64)>> {
    prop::collection::vec((bound(), prop::option::of(bound()), bound()), 0..8)
}

fn legacy_entries() -> impl Strategy<Value = Vec<(Option<f64>, f64)>> {
    prop::collection::vec((prop::option::of(bound()), bound()), 0..8)
}

fn ranges_json(key: &str, entries: &[(f64, Option<f64>, f64)]) -> Value {
    let price_key = if key == "graduated_percentage_ranges" {
        "rate"
    } else {
        "per_unit_amount"
    };
    let list: Vec<Value> = entries
        .iter()
        .map(|(from, to, price)| {
            json!({
                "from_value": from,
                "to_value": to,
                price_key: price.to_string(),
                "flat_amount": "0"
            })
        })
        .collect();
    json!({ key: list })
}

fn legacy_json(entries: &[(Option<f64>, f64)]) -> Value {
    let list: Vec<Value> = entries
        .iter()
        .map(|(up_to, price)| json!({"up_to": up_to, "unit_price": price}))
        .collect();
    json!({ "tiers": list })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_range_labels_use_exact_bounds(entries in range_entries()) {
        for (model, key) in [
            ("graduated", "graduated_ranges"),
            ("volume", "volume_ranges"),
            ("graduated_percentage", "graduated_percentage_ranges"),
        ] {
            let resolution = resolve(model, &ranges_json(key, &entries));
            let tiers = resolution.tiers().unwrap();
            prop_assert_eq!(tiers.len(), entries.len());
            let prices: Vec<f64> = match tiers {
                TierList::Unit(tiers) => tiers.iter().map(|t| t.unit_price).collect(),
                TierList::Rate(tiers) => tiers.iter().map(|t| t.rate).collect(),
            };
            let expected_prices: Vec<f64> = entries.iter().map(|(_, _, price)| *price).collect();
            prop_assert_eq!(prices, expected_prices);
            for (label, (from, to, _)) in tiers.labels().into_iter().zip(&entries) {
                let expected = match to {
                    Some(to) => format!("{}–{}", format_number(*from), format_number(*to)),
                    None => format!("{}+", format_number(*from)),
                };
                prop_assert_eq!(label, expected);
            }
        }
    }

    #[test]
    fn test_legacy_lower_bound_is_previous_cutoff(entries in legacy_entries()) {
        let resolution = resolve("graduated", &legacy_json(&entries));
        let labels = resolution.tiers().unwrap().labels();
        prop_assert_eq!(labels.len(), entries.len());

        let mut prev = 0.0_f64;
        for (label, (up_to, _)) in labels.into_iter().zip(&entries) {
            let expected = match up_to {
                Some(up_to) => format!("{}–{}", format_number(prev), format_number(*up_to)),
                None => format!("{}+", format_number(prev)),
            };
            prop_assert_eq!(label, expected);
            if let Some(up_to) = up_to {
                prev = *up_to;
            }
        }
    }

    #[test]
    fn test_ranges_strictly_win(
        ranges in range_entries().prop_filter("non-empty", |r| !r.is_empty()),
        legacy in legacy_entries(),
    ) {
        let mut props = ranges_json("graduated_ranges", &ranges);
        props["tiers"] = legacy_json(&legacy)["tiers"].clone();

        let with_legacy = resolve("graduated", &props);
        let ranges_only = resolve("graduated", &ranges_json("graduated_ranges", &ranges));
        prop_assert_eq!(with_legacy.tiers(), ranges_only.tiers());
    }

    #[test]
    fn test_resolution_is_idempotent(entries in legacy_entries()) {
        let props = legacy_json(&entries);
        prop_assert_eq!(resolve("volume", &props), resolve("volume", &props));
    }

    #[test]
    fn test_output_is_finite_for_numeric_input(entries in range_entries()) {
        let resolution = resolve("graduated_percentage", &ranges_json("graduated_percentage_ranges", &entries));
        let tiers = resolution.tiers().unwrap();
        prop_assert!(tiers.is_finite());
        prop_assert!(matches!(tiers, TierList::Rate(_)));
    }
}
