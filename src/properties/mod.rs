//! Untyped properties bag: coercion, defaulting and typed decoding.

mod bag;
pub mod coerce;
mod decode;

pub use bag::Properties;
pub use decode::{
    LegacyTier, PackageConfig, PercentageConfig, PricingConfig, RANGE_PRICE_KEYS, RangeEntry,
    StandardConfig, TieredConfig,
};
