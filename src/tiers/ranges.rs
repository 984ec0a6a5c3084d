//! Extraction from explicit-boundary `*_ranges` lists.

use super::label::TierBounds;
use super::{RateTier, UnitTier};
use crate::properties::RangeEntry;

fn bounds(entry: &RangeEntry) -> TierBounds {
    TierBounds::new(entry.from, entry.to)
}

pub fn unit_tiers(entries: &[RangeEntry]) -> Vec<UnitTier> {
    entries
        .iter()
        .map(|entry| UnitTier::new(bounds(entry), entry.price, entry.flat_amount))
        .collect()
}

pub fn rate_tiers(entries: &[RangeEntry]) -> Vec<RateTier> {
    entries
        .iter()
        .map(|entry| RateTier::new(bounds(entry), entry.price, entry.flat_amount))
        .collect()
}
