use serde::{Deserialize, Serialize};

use super::config::EstimatorConfig;
use super::layout::PanelLayout;
use crate::model::{Geometry, RegionalData};

/// Expected energy output of the array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyYield {
    pub annual_production_kwh: f64,
    pub monthly_average_kwh: f64,
    pub performance_ratio: f64,
    /// Annual production per installed kW (kWh/kWp). Zero without capacity.
    pub specific_yield_kwh_per_kwp: f64,
}

/// Performance ratio adjusted for panel height and row spacing.
///
/// Raised panels lose some output, wider rows reduce inter-row shading.
/// The result is clamped to `[0, max_performance_ratio]`.
pub fn performance_ratio(geometry: &Geometry, config: &EstimatorConfig) -> f64 {
    let height_penalty = ((geometry.panel_height_cm - config.reference_height_cm) / 100.0
        * config.height_penalty_per_m)
        .max(0.0);
    let spacing_bonus = ((geometry.row_spacing_cm - config.reference_spacing_cm) / 1000.0
        * config.spacing_bonus_per_10m)
        .min(config.max_spacing_bonus);

    (config.base_performance_ratio + spacing_bonus - height_penalty)
        .clamp(0.0, config.max_performance_ratio)
}

pub fn energy_yield(
    layout: &PanelLayout,
    regional: &RegionalData,
    geometry: &Geometry,
    config: &EstimatorConfig,
) -> EnergyYield {
    let performance_ratio = performance_ratio(geometry, config);
    let annual_production_kwh =
        layout.capacity_kw * regional.avg_sun_hours * 365.0 * performance_ratio;
    let specific_yield_kwh_per_kwp = if layout.capacity_kw > 0.0 {
        annual_production_kwh / layout.capacity_kw
    } else {
        0.0
    };

    EnergyYield {
        annual_production_kwh,
        monthly_average_kwh: annual_production_kwh / 12.0,
        performance_ratio,
        specific_yield_kwh_per_kwp,
    }
}
