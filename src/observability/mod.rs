//! Observability for the resolver.
//!
//! Every resolution runs inside a `tiers.resolve` debug span. Counters are
//! optional and attached per resolver through [`MetricsRegistry`].

mod metrics;
mod spans;

pub use metrics::{Counter, MetricsConfig, MetricsRegistry, MetricsSummary};
pub use spans::{ResolveSpan, resolve_span};

use std::sync::Arc;

/// Observability configuration for a resolver.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    pub metrics: MetricsConfig,
}

impl ObservabilityConfig {
    pub fn new() -> Self {
        Self {
            metrics: MetricsConfig::new(),
        }
    }

    pub fn metrics(mut self, config: MetricsConfig) -> Self {
        self.metrics = config;
        self
    }

    /// `None` when metrics are disabled.
    pub fn build_registry(&self) -> Option<Arc<MetricsRegistry>> {
        self.metrics
            .enabled
            .then(|| Arc::new(MetricsRegistry::new()))
    }
}
