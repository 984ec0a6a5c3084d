//! Structured span definitions for tracing.

use tracing::{Level, Span, field, span};

/// Span around a single resolution; `outcome` and `tier_count` are recorded
/// once the dispatcher has picked a path.
pub fn resolve_span(charge_model: &str) -> Span {
    span!(
        Level::DEBUG,
        "tiers.resolve",
        charge_model = charge_model,
        outcome = field::Empty,
        source = field::Empty,
        tier_count = field::Empty,
    )
}

/// Helper for recording resolution results on a span.
pub struct ResolveSpan {
    span: Span,
}

impl ResolveSpan {
    pub fn new(charge_model: &str) -> Self {
        Self {
            span: resolve_span(charge_model),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn record_tiers(&self, source: &str, tier_count: usize) {
        self.span.record("outcome", "tiers");
        self.span.record("source", source);
        self.span.record("tier_count", tier_count);
    }

    pub fn record_summary(&self) {
        self.span.record("outcome", "summary");
    }

    pub fn record_unrecognized(&self) {
        self.span.record("outcome", "unrecognized");
    }
}
