//! # charge-tiers
//!
//! Normalizes a billing charge's loosely-typed pricing configuration into
//! something a console can render: an ordered list of pricing tiers for
//! tiered models, or a flat summary for single-rate models.
//!
//! ## Quick Start
//!
//! ```rust
//! use charge_tiers::{Resolution, TierList, resolve};
//! use serde_json::json;
//!
//! let resolution = resolve(
//!     "graduated",
//!     &json!({"tiers": [
//!         {"up_to": 50, "unit_price": 1, "flat_amount": 0},
//!         {"up_to": null, "unit_price": 0.8, "flat_amount": 0}
//!     ]}),
//! );
//!
//! let Some(TierList::Unit(tiers)) = resolution.tiers() else {
//!     unreachable!()
//! };
//! assert_eq!(tiers[0].label, "0–50");
//! assert_eq!(tiers[1].label, "50+");
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use charge_tiers::{DisplaySettings, TableView, resolve};
//! use serde_json::json;
//!
//! let settings = DisplaySettings::default();
//!
//! let summary = resolve("percentage", &json!({"rate": 2.9, "fixed_amount": 0.3}));
//! let summary = summary.summary().unwrap();
//! assert_eq!(summary.headline(&settings), "2.9%");
//! assert_eq!(summary.rendered_notes(&settings), ["+$0.30 per event"]);
//!
//! let volume = resolve("volume", &json!({"volume_ranges": [{"from_value": 0, "per_unit_amount": "2"}]}));
//! let table = TableView::from_resolution(&volume, &settings).unwrap();
//! assert_eq!(table.columns, ["Range", "Per unit"]);
//! ```
//!
//! Resolution never fails. Unknown models resolve to
//! [`Resolution::Unrecognized`], unreadable fields take their defaults, and
//! an empty tier list means there is nothing to render.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod display;
pub mod models;
pub mod observability;
pub mod prelude;
pub mod properties;
pub mod resolver;
pub mod summary;
pub mod tiers;

pub use config::{ConfigBuilder, ConfigError, ConfigProvider, DisplaySettings};
pub use display::{TableView, format_money};
pub use models::{ChargeModel, ChargeShape};
pub use observability::{MetricsConfig, MetricsRegistry, ObservabilityConfig};
pub use properties::{PricingConfig, Properties};
pub use resolver::{Charge, Resolution, TierResolver, resolve};
pub use summary::{FlatSummary, SummaryNote};
pub use tiers::{RateTier, TierList, TierSource, UnitTier};

/// Error type for charge-tiers operations.
///
/// Resolution itself never produces one; these come from the surfaces
/// around it (payload parsing, strict model parsing, configuration).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Charge model name is not one of the recognized models.
    #[error("Unknown charge model: {model:?}")]
    UnknownChargeModel { model: String },

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or invalid.
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Configuration or settings errors
    Configuration,
    /// Malformed caller input (payloads, model names)
    Input,
    /// IO and other environment failures
    Internal,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::Env(_) => ErrorCategory::Configuration,
            Error::UnknownChargeModel { .. } | Error::Json(_) => ErrorCategory::Input,
            Error::Io(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_input_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
            ConfigError::Serialization(e) => Error::Json(e),
            ConfigError::Io(e) => Error::Io(e),
            ConfigError::Env(e) => Error::Env(e),
            ConfigError::ValidationErrors(errors) => Error::Config(errors.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownChargeModel {
            model: "dynamic".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown charge model: \"dynamic\"");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_config_error_conversion() {
        let err: Error = ConfigError::InvalidValue {
            key: "display.amount_decimals".to_string(),
            message: "9 is not an integer in 0..=6".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.is_configuration_error());

        let err: Error = ConfigError::Io(std::io::Error::other("disk")).into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
