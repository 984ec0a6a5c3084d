//! Flat pricing summaries for the non-tiered charge models.
//!
//! Optional details are surfaced as [`SummaryNote`]s. Fixed fees and free
//! units appear only when positive; per-transaction bounds appear whenever
//! they are present, including an explicit zero.

use serde::Serialize;

use crate::config::DisplaySettings;
use crate::display::format_money;
use crate::properties::{PackageConfig, PercentageConfig, PricingConfig, StandardConfig};
use crate::tiers::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "charge_model", rename_all = "snake_case")]
pub enum FlatSummary {
    Standard(StandardConfig),
    Package(PackageConfig),
    Percentage(PercentageConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SummaryNote {
    FreeUnits(f64),
    FixedFee(f64),
    FreeEvents(f64),
    MinPerTransaction(f64),
    MaxPerTransaction(f64),
}

impl SummaryNote {
    pub fn render(&self, settings: &DisplaySettings) -> String {
        match *self {
            Self::FreeUnits(units) => format!("{} free units", format_number(units)),
            Self::FixedFee(amount) => format!("+{} per event", format_money(amount, settings)),
            Self::FreeEvents(events) => format!("First {} events free", format_number(events)),
            Self::MinPerTransaction(amount) => format!("Min: {}", format_money(amount, settings)),
            Self::MaxPerTransaction(amount) => format!("Max: {}", format_money(amount, settings)),
        }
    }
}

impl FlatSummary {
    /// `None` for tiered configurations.
    pub fn from_config(config: &PricingConfig) -> Option<Self> {
        match config {
            PricingConfig::Standard(c) => Some(Self::Standard(*c)),
            PricingConfig::Package(c) => Some(Self::Package(*c)),
            PricingConfig::Percentage(c) => Some(Self::Percentage(*c)),
            PricingConfig::Graduated(_)
            | PricingConfig::GraduatedPercentage(_)
            | PricingConfig::Volume(_) => None,
        }
    }

    pub fn headline(&self, settings: &DisplaySettings) -> String {
        match self {
            Self::Standard(c) => format!("{} per unit", format_money(c.amount, settings)),
            Self::Package(c) if c.package_size == 1.0 => {
                format!("{} per unit", format_money(c.amount, settings))
            }
            Self::Package(c) => format!(
                "{} per {} units",
                format_money(c.amount, settings),
                format_number(c.package_size)
            ),
            Self::Percentage(c) => format!("{}%", format_number(c.rate)),
        }
    }

    pub fn notes(&self) -> Vec<SummaryNote> {
        let mut notes = Vec::new();
        match self {
            Self::Standard(_) => {}
            Self::Package(c) => {
                if c.free_units > 0.0 {
                    notes.push(SummaryNote::FreeUnits(c.free_units));
                }
            }
            Self::Percentage(c) => {
                if c.fixed_amount > 0.0 {
                    notes.push(SummaryNote::FixedFee(c.fixed_amount));
                }
                if c.free_units_per_events > 0.0 {
                    notes.push(SummaryNote::FreeEvents(c.free_units_per_events));
                }
                if let Some(min) = c.per_transaction_min_amount {
                    notes.push(SummaryNote::MinPerTransaction(min));
                }
                if let Some(max) = c.per_transaction_max_amount {
                    notes.push(SummaryNote::MaxPerTransaction(max));
                }
            }
        }
        notes
    }

    pub fn rendered_notes(&self, settings: &DisplaySettings) -> Vec<String> {
        self.notes().iter().map(|note| note.render(settings)).collect()
    }
}
