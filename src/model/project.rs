use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, check_non_negative};
use crate::uid::ProjectId;

/// Irrigation method used on the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
    #[default]
    None,
}

/// Farm-level inputs of an agrovoltaic estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: ProjectId,
    pub farm_name: String,
    /// Total land area in hectares.
    pub total_area_ha: f64,
    /// Part of the land eligible for panels, in hectares.
    pub solar_area_ha: f64,
    /// Id of the crop grown under the panels.
    pub crop_id: String,
    /// Yield without panels, in tonnes per hectare.
    pub current_yield_t_per_ha: f64,
    #[serde(default)]
    pub irrigation: IrrigationMethod,
    /// Region identifier used to look up sun hours.
    pub location: String,
}

impl Project {
    pub fn new(
        farm_name: &str,
        total_area_ha: f64,
        solar_area_ha: f64,
        crop_id: &str,
        current_yield_t_per_ha: f64,
        location: &str,
    ) -> Self {
        Self {
            id: ProjectId::new(),
            farm_name: farm_name.to_string(),
            total_area_ha,
            solar_area_ha,
            crop_id: crop_id.to_string(),
            current_yield_t_per_ha,
            irrigation: IrrigationMethod::default(),
            location: location.to_string(),
        }
    }

    pub fn with_irrigation(mut self, irrigation: IrrigationMethod) -> Self {
        self.irrigation = irrigation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("total_area_ha", self.total_area_ha)?;
        check_non_negative("solar_area_ha", self.solar_area_ha)?;
        check_non_negative("current_yield_t_per_ha", self.current_yield_t_per_ha)?;
        if self.solar_area_ha > self.total_area_ha {
            return Err(Error::SolarAreaExceedsTotal {
                solar_area_ha: self.solar_area_ha,
                total_area_ha: self.total_area_ha,
            });
        }
        Ok(())
    }
}
