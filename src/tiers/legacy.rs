//! Extraction from the cumulative legacy `tiers` list.
//!
//! Each legacy tier only records its upper cutoff, so the lower bound is
//! carried over from the previous tier. The cursor starts at zero and only
//! advances on a closed tier; entries after an open tier keep the stale
//! cursor as their lower bound.

use super::UnitTier;
use super::label::TierBounds;
use crate::properties::LegacyTier;

pub fn unit_tiers(entries: &[LegacyTier]) -> Vec<UnitTier> {
    let (_, tiers) = entries.iter().fold(
        (0.0_f64, Vec::with_capacity(entries.len())),
        |(prev, mut tiers), entry| {
            let bounds = TierBounds::new(prev, entry.up_to);
            tiers.push(UnitTier::new(bounds, entry.unit_price, entry.flat_amount));
            (entry.up_to.unwrap_or(prev), tiers)
        },
    );
    tiers
}
