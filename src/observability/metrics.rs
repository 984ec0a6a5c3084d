//! Resolution counters.
//!
//! Counters never influence resolver output; they only record what the
//! resolver saw.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::tiers::TierSource;

/// Metrics configuration.
#[derive(Debug, Clone, Default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl MetricsConfig {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Thread-safe atomic counter.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add(&self, n: u64) {
        self.value.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Resolver metrics registry.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    pub resolutions_total: Counter,
    pub tiered: Counter,
    pub flat: Counter,
    pub unrecognized: Counter,
    pub empty_tiers: Counter,
    pub legacy_fallbacks: Counter,
    pub tiers_emitted: Counter,
}

impl MetricsRegistry {
    /// Registry with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_tiered(&self, tier_count: usize, source: TierSource) {
        self.resolutions_total.inc();
        self.tiered.inc();
        self.tiers_emitted.add(tier_count as u64);
        match source {
            TierSource::Legacy => self.legacy_fallbacks.inc(),
            TierSource::None => self.empty_tiers.inc(),
            TierSource::Ranges => {}
        }
    }

    pub(crate) fn record_flat(&self) {
        self.resolutions_total.inc();
        self.flat.inc();
    }

    pub(crate) fn record_unrecognized(&self) {
        self.resolutions_total.inc();
        self.unrecognized.inc();
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            resolutions_total: self.resolutions_total.get(),
            tiered: self.tiered.get(),
            flat: self.flat.get(),
            unrecognized: self.unrecognized.get(),
            empty_tiers: self.empty_tiers.get(),
            legacy_fallbacks: self.legacy_fallbacks.get(),
            tiers_emitted: self.tiers_emitted.get(),
        }
    }
}

/// Point-in-time copy of the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSummary {
    pub resolutions_total: u64,
    pub tiered: u64,
    pub flat: u64,
    pub unrecognized: u64,
    pub empty_tiers: u64,
    pub legacy_fallbacks: u64,
    pub tiers_emitted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let counter = Counter::new();
        counter.inc();
        counter.add(4);
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn test_registry_outcomes() {
        let registry = MetricsRegistry::new();
        assert_eq!(registry.summary(), MetricsSummary::default());

        registry.record_tiered(2, TierSource::Ranges);
        registry.record_tiered(3, TierSource::Legacy);
        registry.record_tiered(0, TierSource::None);
        registry.record_flat();
        registry.record_unrecognized();

        let summary = registry.summary();
        assert_eq!(summary.resolutions_total, 5);
        assert_eq!(summary.tiered, 3);
        assert_eq!(summary.legacy_fallbacks, 1);
        assert_eq!(summary.empty_tiers, 1);
        assert_eq!(summary.tiers_emitted, 5);
        assert_eq!(summary.flat, 1);
        assert_eq!(summary.unrecognized, 1);
    }
}
