//! Normalized pricing tiers.
//!
//! Two source representations feed the same output records:
//!
//! - **ranges**: `graduated_ranges`, `volume_ranges` and
//!   `graduated_percentage_ranges`, each entry carrying explicit
//!   `from_value`/`to_value` bounds ([`ranges`]).
//! - **legacy tiers**: the older cumulative `tiers` list where each entry
//!   only has an `up_to` cutoff ([`legacy`]).
//!
//! When a charge carries both, ranges win outright; the legacy list is only
//! read when the ranges list yields no entries.

pub mod label;
pub mod legacy;
pub mod ranges;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use label::{RANGE_SEPARATOR, TierBounds, format_number};

use crate::properties::TieredConfig;

/// Tier of a unit-priced model (graduated, volume).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnitTier {
    pub label: String,
    pub unit_price: f64,
    pub flat_amount: f64,
}

impl UnitTier {
    pub fn new(bounds: TierBounds, unit_price: f64, flat_amount: f64) -> Self {
        Self {
            label: bounds.label(),
            unit_price,
            flat_amount,
        }
    }

    fn is_finite(&self) -> bool {
        self.unit_price.is_finite() && self.flat_amount.is_finite()
    }
}

/// Tier of a rate-priced model (graduated percentage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RateTier {
    pub label: String,
    pub rate: f64,
    pub flat_amount: f64,
}

impl RateTier {
    pub fn new(bounds: TierBounds, rate: f64, flat_amount: f64) -> Self {
        Self {
            label: bounds.label(),
            rate,
            flat_amount,
        }
    }

    fn is_finite(&self) -> bool {
        self.rate.is_finite() && self.flat_amount.is_finite()
    }
}

/// Ordered tier records; serializes as a plain array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TierList {
    Unit(Vec<UnitTier>),
    Rate(Vec<RateTier>),
}

impl TierList {
    pub fn len(&self) -> usize {
        match self {
            Self::Unit(tiers) => tiers.len(),
            Self::Rate(tiers) => tiers.len(),
        }
    }

    /// An empty list means "nothing to render", never an error.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Unit(tiers) => tiers.iter().map(|t| t.label.as_str()).collect(),
            Self::Rate(tiers) => tiers.iter().map(|t| t.label.as_str()).collect(),
        }
    }

    /// Whether every numeric field is finite. Garbage input strings coerce
    /// to `NaN` and are passed through, so renderers may want to check.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Unit(tiers) => tiers.iter().all(UnitTier::is_finite),
            Self::Rate(tiers) => tiers.iter().all(RateTier::is_finite),
        }
    }
}

/// Which representation produced a tier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierSource {
    Ranges,
    Legacy,
    None,
}

impl TierSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ranges => "ranges",
            Self::Legacy => "legacy",
            Self::None => "none",
        }
    }
}

impl TieredConfig {
    /// Ranges first; legacy tiers only when ranges yield nothing.
    pub fn unit_tiers(&self) -> (Vec<UnitTier>, TierSource) {
        if !self.ranges.is_empty() {
            return (ranges::unit_tiers(&self.ranges), TierSource::Ranges);
        }
        if !self.legacy.is_empty() {
            return (legacy::unit_tiers(&self.legacy), TierSource::Legacy);
        }
        (Vec::new(), TierSource::None)
    }
}

/// JSON schema of the tier records handed to renderers.
pub fn output_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(TierList);
    serde_json::to_value(schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{LegacyTier, RangeEntry};

    fn config() -> TieredConfig {
        TieredConfig {
            ranges: vec![RangeEntry {
                from: 0.0,
                to: None,
                price: 2.0,
                flat_amount: 0.0,
            }],
            legacy: vec![LegacyTier {
                up_to: Some(10.0),
                unit_price: 9.0,
                flat_amount: 0.0,
            }],
        }
    }

    #[test]
    fn test_ranges_take_precedence() {
        let (tiers, source) = config().unit_tiers();
        assert_eq!(source, TierSource::Ranges);
        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers[0].unit_price, 2.0);
    }

    #[test]
    fn test_legacy_fallback_when_ranges_empty() {
        let mut config = config();
        config.ranges.clear();
        let (tiers, source) = config.unit_tiers();
        assert_eq!(source, TierSource::Legacy);
        assert_eq!(tiers[0].label, "0\u{2013}10");
    }

    #[test]
    fn test_nothing_to_render() {
        let (tiers, source) = TieredConfig::default().unit_tiers();
        assert!(tiers.is_empty());
        assert_eq!(source, TierSource::None);
    }

    #[test]
    fn test_tier_list_serializes_as_array() {
        let list = TierList::Rate(vec![RateTier {
            label: "0+".into(),
            rate: 1.0,
            flat_amount: 0.0,
        }]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"label": "0+", "rate": 1.0, "flat_amount": 0.0}])
        );
    }

    #[test]
    fn test_is_finite() {
        let list = TierList::Unit(vec![UnitTier {
            label: "0+".into(),
            unit_price: f64::NAN,
            flat_amount: 0.0,
        }]);
        assert!(!list.is_finite());
        assert!(TierList::Unit(vec![]).is_finite());
    }

    #[test]
    fn test_output_schema_describes_records() {
        let schema = output_schema();
        let text = schema.to_string();
        assert!(text.contains("unit_price"));
        assert!(text.contains("rate"));
    }
}
