//! Prelude module for convenient imports.
//!
//! ```rust
//! use charge_tiers::prelude::*;
//! ```

pub use crate::Error;
pub use crate::Result;

// Resolution
pub use crate::resolver::{Charge, Resolution, TierResolver, resolve};

// Models and input
pub use crate::models::ChargeModel;
pub use crate::properties::PricingConfig;

// Output
pub use crate::summary::{FlatSummary, SummaryNote};
pub use crate::tiers::{RateTier, TierList, UnitTier};

// Rendering
pub use crate::config::DisplaySettings;
pub use crate::display::TableView;
