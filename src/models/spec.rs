use super::kind::ChargeModel;

/// Field layout of a tiered charge model's properties bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierFields {
    pub ranges_key: &'static str,
    pub legacy_key: Option<&'static str>,
    pub has_flat_column: bool,
}

pub const LEGACY_TIERS_KEY: &str = "tiers";

impl TierFields {
    pub const GRADUATED: Self = Self {
        ranges_key: "graduated_ranges",
        legacy_key: Some(LEGACY_TIERS_KEY),
        has_flat_column: true,
    };

    pub const VOLUME: Self = Self {
        ranges_key: "volume_ranges",
        legacy_key: Some(LEGACY_TIERS_KEY),
        has_flat_column: false,
    };

    pub const GRADUATED_PERCENTAGE: Self = Self {
        ranges_key: "graduated_percentage_ranges",
        legacy_key: None,
        has_flat_column: true,
    };
}

impl ChargeModel {
    /// Returns `None` for flat models.
    pub fn tier_fields(&self) -> Option<&'static TierFields> {
        match self {
            Self::Graduated => Some(&TierFields::GRADUATED),
            Self::Volume => Some(&TierFields::VOLUME),
            Self::GraduatedPercentage => Some(&TierFields::GRADUATED_PERCENTAGE),
            Self::Standard | Self::Package | Self::Percentage => None,
        }
    }
}
