// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Prediction outputs and the qualitative efficiency banding.

use std::fmt;

/// Model outputs for one vehicle.
///
/// Raw values straight from the pipeline; no rounding or clipping happens
/// at this layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Combined fuel consumption in L/100km.
    pub fuel_consumption: f64,
    /// CO2 emissions in g/km.
    pub co2_emissions: f64,
}

impl Prediction {
    /// The efficiency band for this prediction's fuel consumption.
    #[must_use]
    pub fn efficiency(&self) -> Efficiency {
        Efficiency::from_consumption(self.fuel_consumption)
    }
}

/// Qualitative fuel-efficiency bands over combined consumption.
///
/// Bands are half-open: the lower boundary belongs to the band above it,
/// so exactly 6.0 L/100km is `Good`, not `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Efficiency {
    /// Below 6 L/100km.
    Excellent,
    /// 6 to 8 L/100km.
    Good,
    /// 8 to 10 L/100km.
    Average,
    /// 10 to 12 L/100km.
    BelowAverage,
    /// 12 L/100km and above.
    Poor,
}

impl Efficiency {
    /// Classify a combined consumption figure in L/100km.
    #[must_use]
    pub fn from_consumption(l_per_100km: f64) -> Self {
        if l_per_100km < 6.0 {
            Self::Excellent
        } else if l_per_100km < 8.0 {
            Self::Good
        } else if l_per_100km < 10.0 {
            Self::Average
        } else if l_per_100km < 12.0 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    /// The description used in the report.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent (very efficient)",
            Self::Good => "good (efficient)",
            Self::Average => "average",
            Self::BelowAverage => "below average (inefficient)",
            Self::Poor => "poor (very inefficient)",
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
