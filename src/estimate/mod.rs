//! Agrovoltaic yield and economics estimator.
//!
//! [`estimate`] is a pure function: identical inputs always produce
//! bit-identical results, and nothing is cached between calls. The stages
//! run in a fixed order, each feeding the next:
//!
//! 1. [`layout`] packs panels into the solar-eligible area
//! 2. [`energy`] converts capacity and sun hours into annual production
//! 3. [`agriculture`] derives shading and its effect on crop yield
//! 4. [`economics`] combines both revenue streams with the investment
//! 5. [`recommendations`] flags thresholds worth acting on
//!
//! Inputs are expected to have passed their `validate()` checks; the
//! estimator does not re-check ranges but never produces NaN or infinity
//! for degenerate values such as zero capacity or zero profit.

pub mod agriculture;
pub mod config;
pub mod economics;
pub mod energy;
pub mod layout;
pub mod recommendations;
pub mod result;

pub use agriculture::AgriculturalImpact;
pub use config::EstimatorConfig;
pub use economics::{Economics, Payback};
pub use energy::EnergyYield;
pub use layout::PanelLayout;
pub use recommendations::Recommendation;
pub use result::Estimate;

use crate::model::{Crop, Geometry, Project, RegionalData};

/// Runs the estimator for the crop referenced by `project.crop_id`.
///
/// Returns `None` when no crop in `crops` has that id.
pub fn estimate(
    project: &Project,
    crops: &[Crop],
    regional: &RegionalData,
    geometry: &Geometry,
    config: &EstimatorConfig,
) -> Option<Estimate> {
    let crop = crops.iter().find(|c| c.id == project.crop_id)?;
    Some(estimate_with_crop(project, crop, regional, geometry, config))
}

/// Runs the estimator with an already resolved crop.
pub fn estimate_with_crop(
    project: &Project,
    crop: &Crop,
    regional: &RegionalData,
    geometry: &Geometry,
    config: &EstimatorConfig,
) -> Estimate {
    let panels = layout::panel_layout(project, geometry, config);
    let energy = energy::energy_yield(&panels, regional, geometry, config);
    let agriculture = agriculture::agricultural_impact(project, crop, geometry, config);
    let economics =
        economics::economics(project, crop, &panels, &energy, &agriculture, config);
    let recommendations =
        recommendations::recommendations(crop, geometry, &agriculture, &economics, config);

    Estimate {
        project_id: project.id.clone(),
        farm_name: project.farm_name.clone(),
        crop_id: crop.id.clone(),
        region_id: regional.id.clone(),
        geometry: *geometry,
        panels,
        energy,
        agriculture,
        economics,
        recommendations,
    }
}
