use serde::{Deserialize, Serialize};

use super::config::EstimatorConfig;
use crate::model::{Crop, Geometry, Project};

/// Effect of the array on the crop grown underneath.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgriculturalImpact {
    pub shading_pct: f64,
    /// Multiplier applied to the current yield. Values above 1 mean the crop
    /// benefits from the partial shade.
    pub yield_impact_factor: f64,
    pub current_yield_t_per_ha: f64,
    pub new_yield_t_per_ha: f64,
    pub yield_change_pct: f64,
    pub water_savings_pct: f64,
    pub soil_protection: bool,
}

/// Share of the ground shaded by the panels, in `[0, max_shading_pct]`.
pub fn shading_pct(geometry: &Geometry, config: &EstimatorConfig) -> f64 {
    (geometry.ground_coverage_pct * (geometry.panel_height_cm / config.shading_reference_height_cm))
        .clamp(0.0, config.max_shading_pct)
}

/// Yield multiplier for a crop under the given shading, never below `min_yield_factor`.
pub fn yield_impact_factor(shading_pct: f64, crop: &Crop, config: &EstimatorConfig) -> f64 {
    let excess_shade = shading_pct / 100.0 - crop.shade_tolerance_pct / 100.0;
    (1.0 - excess_shade * config.yield_sensitivity).max(config.min_yield_factor)
}

/// Reduced evaporation under the panels, in `[0, max_water_savings_pct]`.
pub fn water_savings_pct(shading_pct: f64, config: &EstimatorConfig) -> f64 {
    (shading_pct * config.water_savings_per_shading_pct)
        .clamp(0.0, config.max_water_savings_pct)
}

pub fn soil_protection(geometry: &Geometry, config: &EstimatorConfig) -> bool {
    geometry.panel_height_cm >= config.soil_protection_min_height_cm
        && geometry.row_spacing_cm >= config.soil_protection_min_spacing_cm
}

pub fn agricultural_impact(
    project: &Project,
    crop: &Crop,
    geometry: &Geometry,
    config: &EstimatorConfig,
) -> AgriculturalImpact {
    let shading_pct = shading_pct(geometry, config);
    let yield_impact_factor = yield_impact_factor(shading_pct, crop, config);

    AgriculturalImpact {
        shading_pct,
        yield_impact_factor,
        current_yield_t_per_ha: project.current_yield_t_per_ha,
        new_yield_t_per_ha: project.current_yield_t_per_ha * yield_impact_factor,
        yield_change_pct: (yield_impact_factor - 1.0) * 100.0,
        water_savings_pct: water_savings_pct(shading_pct, config),
        soil_protection: soil_protection(geometry, config),
    }
}
