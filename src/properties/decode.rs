//! Typed decoding of a properties bag, one variant per charge model.

use serde::Serialize;
use serde_json::Value;

use super::bag::Properties;
use crate::models::{ChargeModel, TierFields};

/// Price keys of a range entry, first non-null wins. Unit models write
/// `per_unit_amount` and graduated percentage writes `rate`; a single chain
/// serves all three since no model carries both.
pub const RANGE_PRICE_KEYS: [&str; 2] = ["per_unit_amount", "rate"];

/// One entry of a `*_ranges` list after defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeEntry {
    pub from: f64,
    pub to: Option<f64>,
    /// `per_unit_amount` for unit models, `rate` for graduated percentage.
    pub price: f64,
    pub flat_amount: f64,
}

impl RangeEntry {
    pub fn decode(entry: &Value) -> Self {
        let props = Properties::new(entry);
        Self {
            from: props.number_or("from_value", 0.0),
            to: props.optional_number("to_value"),
            price: props.first_number_or(&RANGE_PRICE_KEYS, 0.0),
            flat_amount: props.number_or("flat_amount", 0.0),
        }
    }
}

/// One entry of the cumulative legacy `tiers` list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegacyTier {
    pub up_to: Option<f64>,
    pub unit_price: f64,
    pub flat_amount: f64,
}

impl LegacyTier {
    pub fn decode(entry: &Value) -> Self {
        let props = Properties::new(entry);
        Self {
            up_to: props.optional_number("up_to"),
            unit_price: props.number_or("unit_price", 0.0),
            flat_amount: props.number_or("flat_amount", 0.0),
        }
    }
}

/// Both tier representations a unit-priced tiered charge may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TieredConfig {
    pub ranges: Vec<RangeEntry>,
    pub legacy: Vec<LegacyTier>,
}

impl TieredConfig {
    fn decode(props: Properties<'_>, fields: &TierFields) -> Self {
        Self {
            ranges: decode_ranges(props, fields),
            legacy: fields
                .legacy_key
                .map(|key| props.list(key).iter().map(LegacyTier::decode).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardConfig {
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackageConfig {
    pub amount: f64,
    pub package_size: f64,
    pub free_units: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentageConfig {
    pub rate: f64,
    pub fixed_amount: f64,
    pub free_units_per_events: f64,
    pub per_transaction_min_amount: Option<f64>,
    pub per_transaction_max_amount: Option<f64>,
}

/// A charge's pricing configuration, decoded for its model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "charge_model", content = "config", rename_all = "snake_case")]
pub enum PricingConfig {
    Standard(StandardConfig),
    Graduated(TieredConfig),
    GraduatedPercentage(Vec<RangeEntry>),
    Package(PackageConfig),
    Percentage(PercentageConfig),
    Volume(TieredConfig),
}

impl PricingConfig {
    /// Never fails: unreadable members fall back to their defaults.
    pub fn decode(model: ChargeModel, properties: &Value) -> Self {
        let props = Properties::new(properties);
        match model {
            ChargeModel::Standard => Self::Standard(StandardConfig {
                amount: amount(props),
            }),
            ChargeModel::Package => Self::Package(PackageConfig {
                amount: amount(props),
                package_size: props.number_or("package_size", 1.0),
                free_units: props.number_or("free_units", 0.0),
            }),
            ChargeModel::Percentage => Self::Percentage(PercentageConfig {
                rate: props.first_number_or(&["rate", "percentage"], 0.0),
                fixed_amount: props.number_or("fixed_amount", 0.0),
                free_units_per_events: props.number_or("free_units_per_events", 0.0),
                per_transaction_min_amount: props.optional_number("per_transaction_min_amount"),
                per_transaction_max_amount: props.optional_number("per_transaction_max_amount"),
            }),
            ChargeModel::Graduated => {
                Self::Graduated(TieredConfig::decode(props, &TierFields::GRADUATED))
            }
            ChargeModel::Volume => Self::Volume(TieredConfig::decode(props, &TierFields::VOLUME)),
            ChargeModel::GraduatedPercentage => Self::GraduatedPercentage(decode_ranges(
                props,
                &TierFields::GRADUATED_PERCENTAGE,
            )),
        }
    }

    pub fn model(&self) -> ChargeModel {
        match self {
            Self::Standard(_) => ChargeModel::Standard,
            Self::Graduated(_) => ChargeModel::Graduated,
            Self::GraduatedPercentage(_) => ChargeModel::GraduatedPercentage,
            Self::Package(_) => ChargeModel::Package,
            Self::Percentage(_) => ChargeModel::Percentage,
            Self::Volume(_) => ChargeModel::Volume,
        }
    }
}

fn amount(props: Properties<'_>) -> f64 {
    props.first_number_or(&["amount", "unit_price"], 0.0)
}

fn decode_ranges(props: Properties<'_>, fields: &TierFields) -> Vec<RangeEntry> {
    props
        .list(fields.ranges_key)
        .iter()
        .map(RangeEntry::decode)
        .collect()
}
