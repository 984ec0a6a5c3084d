//! Model dispatcher.
//!
//! Maps a charge model name and its raw properties bag to a [`Resolution`].
//! Resolution is a pure, synchronous function of its input and never fails:
//! unknown models resolve to [`Resolution::Unrecognized`] and unreadable
//! fields fall back to their defaults.

mod charge;

pub use charge::Charge;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::ChargeModel;
use crate::observability::{MetricsRegistry, ObservabilityConfig, ResolveSpan};
use crate::properties::PricingConfig;
use crate::summary::FlatSummary;
use crate::tiers::{TierList, TierSource, ranges};

/// What a renderer gets for one charge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Tiered model; an empty list means nothing to render.
    Tiers {
        model: ChargeModel,
        source: TierSource,
        tiers: TierList,
    },
    Summary { summary: FlatSummary },
    Unrecognized,
}

impl Resolution {
    pub fn tiers(&self) -> Option<&TierList> {
        match self {
            Self::Tiers { tiers, .. } => Some(tiers),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&FlatSummary> {
        match self {
            Self::Summary { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn model(&self) -> Option<ChargeModel> {
        match self {
            Self::Tiers { model, .. } => Some(*model),
            Self::Summary { summary } => Some(match summary {
                FlatSummary::Standard(_) => ChargeModel::Standard,
                FlatSummary::Package(_) => ChargeModel::Package,
                FlatSummary::Percentage(_) => ChargeModel::Percentage,
            }),
            Self::Unrecognized => None,
        }
    }

    /// Whether a renderer has anything to draw.
    pub fn has_content(&self) -> bool {
        match self {
            Self::Tiers { tiers, .. } => !tiers.is_empty(),
            Self::Summary { .. } => true,
            Self::Unrecognized => false,
        }
    }
}

/// Charge pricing resolver.
///
/// Holds nothing that affects output; the optional metrics registry only
/// counts outcomes. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct TierResolver {
    metrics: Option<Arc<MetricsRegistry>>,
}

impl TierResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            metrics: Some(metrics),
        }
    }

    pub fn from_config(config: &ObservabilityConfig) -> Self {
        Self {
            metrics: config.build_registry(),
        }
    }

    pub fn metrics(&self) -> Option<&Arc<MetricsRegistry>> {
        self.metrics.as_ref()
    }

    pub fn resolve(&self, charge_model: &str, properties: &Value) -> Resolution {
        let span = ResolveSpan::new(charge_model);
        let _guard = span.span().enter();

        match ChargeModel::parse(charge_model) {
            Some(model) => self.resolve_config(&PricingConfig::decode(model, properties), &span),
            None => {
                debug!(charge_model, "Unrecognized charge model, nothing to render");
                span.record_unrecognized();
                if let Some(metrics) = &self.metrics {
                    metrics.record_unrecognized();
                }
                Resolution::Unrecognized
            }
        }
    }

    pub fn resolve_charge(&self, charge: &Charge) -> Resolution {
        self.resolve(&charge.charge_model, &charge.properties)
    }

    /// Resolves an already decoded configuration.
    pub fn resolve_decoded(&self, config: &PricingConfig) -> Resolution {
        let span = ResolveSpan::new(config.model().as_str());
        let _guard = span.span().enter();
        self.resolve_config(config, &span)
    }

    fn resolve_config(&self, config: &PricingConfig, span: &ResolveSpan) -> Resolution {
        if let Some(summary) = FlatSummary::from_config(config) {
            span.record_summary();
            if let Some(metrics) = &self.metrics {
                metrics.record_flat();
            }
            return Resolution::Summary { summary };
        }

        let model = config.model();
        let (tiers, source) = match config {
            PricingConfig::Graduated(tiered) | PricingConfig::Volume(tiered) => {
                let (tiers, source) = tiered.unit_tiers();
                (TierList::Unit(tiers), source)
            }
            PricingConfig::GraduatedPercentage(entries) if !entries.is_empty() => {
                (TierList::Rate(ranges::rate_tiers(entries)), TierSource::Ranges)
            }
            _ => (TierList::Rate(Vec::new()), TierSource::None),
        };

        if source == TierSource::Legacy {
            debug!(charge_model = %model, "No ranges present, using legacy tiers");
        }
        if !tiers.is_finite() {
            warn!(charge_model = %model, "Tier values coerced to non-finite numbers");
        }

        span.record_tiers(source.as_str(), tiers.len());
        if let Some(metrics) = &self.metrics {
            metrics.record_tiered(tiers.len(), source);
        }

        Resolution::Tiers {
            model,
            source,
            tiers,
        }
    }
}

/// Resolves with a metrics-free resolver.
pub fn resolve(charge_model: &str, properties: &Value) -> Resolution {
    TierResolver::new().resolve(charge_model, properties)
}
