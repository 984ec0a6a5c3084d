use serde::Serialize;

use crate::config::DisplaySettings;
use crate::models::ChargeModel;
use crate::resolver::Resolution;
use crate::tiers::{TierList, format_number};

use super::format_money;

/// Tier table ready for a table widget: one header row, one row per tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// `None` when there is nothing tiered to render.
    pub fn from_resolution(resolution: &Resolution, settings: &DisplaySettings) -> Option<Self> {
        match resolution {
            Resolution::Tiers { model, tiers, .. } if !tiers.is_empty() => {
                Some(Self::from_tiers(*model, tiers, settings))
            }
            _ => None,
        }
    }

    pub fn from_tiers(model: ChargeModel, tiers: &TierList, settings: &DisplaySettings) -> Self {
        let with_flat = model
            .tier_fields()
            .is_none_or(|fields| fields.has_flat_column);

        let (price_header, rows): (&str, Vec<Vec<String>>) = match tiers {
            TierList::Unit(tiers) => (
                "Per unit",
                tiers
                    .iter()
                    .map(|tier| {
                        row(
                            &tier.label,
                            format_money(tier.unit_price, settings),
                            with_flat.then(|| format_money(tier.flat_amount, settings)),
                        )
                    })
                    .collect(),
            ),
            TierList::Rate(tiers) => (
                "Rate",
                tiers
                    .iter()
                    .map(|tier| {
                        row(
                            &tier.label,
                            format!("{}%", format_number(tier.rate)),
                            with_flat.then(|| format_money(tier.flat_amount, settings)),
                        )
                    })
                    .collect(),
            ),
        };

        let mut columns = vec!["Range".to_string(), price_header.to_string()];
        if with_flat {
            columns.push("Flat fee".to_string());
        }

        Self { columns, rows }
    }
}

fn row(label: &str, price: String, flat: Option<String>) -> Vec<String> {
    let mut cells = vec![label.to_string(), price];
    cells.extend(flat);
    cells
}
