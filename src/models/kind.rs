use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pricing strategy attached to a billable metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeModel {
    Standard,
    Graduated,
    GraduatedPercentage,
    Package,
    Percentage,
    Volume,
}

/// How a charge model is presented to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeShape {
    Tiered,
    Flat,
}

impl ChargeModel {
    pub const ALL: [ChargeModel; 6] = [
        Self::Standard,
        Self::Graduated,
        Self::GraduatedPercentage,
        Self::Package,
        Self::Percentage,
        Self::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Graduated => "graduated",
            Self::GraduatedPercentage => "graduated_percentage",
            Self::Package => "package",
            Self::Percentage => "percentage",
            Self::Volume => "volume",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Graduated => "Graduated",
            Self::GraduatedPercentage => "Graduated percentage",
            Self::Package => "Package",
            Self::Percentage => "Percentage",
            Self::Volume => "Volume",
        }
    }

    pub fn shape(&self) -> ChargeShape {
        match self {
            Self::Graduated | Self::GraduatedPercentage | Self::Volume => ChargeShape::Tiered,
            Self::Standard | Self::Package | Self::Percentage => ChargeShape::Flat,
        }
    }

    pub fn is_tiered(&self) -> bool {
        self.shape() == ChargeShape::Tiered
    }

    /// Lenient lookup used by the resolver; unknown names are not an error there.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.as_str() == name)
    }
}

impl fmt::Display for ChargeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChargeModel {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::Error::UnknownChargeModel {
            model: s.to_string(),
        })
    }
}
