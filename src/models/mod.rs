//! Charge models recognized by the resolver.

mod kind;
mod spec;

pub use kind::{ChargeModel, ChargeShape};
pub use spec::{LEGACY_TIERS_KEY, TierFields};
