use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, check_non_negative, check_range};
use crate::name::Reference;

/// Water demand class of a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Crop reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: String,
    pub name: String,
    /// Share of shading the crop tolerates without yield loss, in %.
    pub shade_tolerance_pct: f64,
    /// Plant height at maturity in cm.
    pub height_at_maturity_cm: f64,
    pub water_requirement: WaterRequirement,
    /// Market price in currency per kg.
    pub market_price_per_kg: f64,
    /// Suitability for agrovoltaic co-location (0-100).
    pub compatibility_score: f64,
}

impl Crop {
    pub fn new(
        id: &str,
        name: &str,
        shade_tolerance_pct: f64,
        height_at_maturity_cm: f64,
        water_requirement: WaterRequirement,
        market_price_per_kg: f64,
        compatibility_score: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            shade_tolerance_pct,
            height_at_maturity_cm,
            water_requirement,
            market_price_per_kg,
            compatibility_score,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_range("shade_tolerance_pct", self.shade_tolerance_pct, 0.0, 100.0)?;
        check_non_negative("height_at_maturity_cm", self.height_at_maturity_cm)?;
        check_non_negative("market_price_per_kg", self.market_price_per_kg)?;
        check_range("compatibility_score", self.compatibility_score, 0.0, 100.0)?;
        Ok(())
    }
}

impl Reference for Crop {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}
