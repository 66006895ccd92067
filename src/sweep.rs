//! Evaluates the estimator across the range of one geometry slider.

use crate::error::{Error, Result};
use crate::estimate::{Estimate, EstimatorConfig, estimate_with_crop};
use crate::model::{Crop, Geometry, GeometryParameter, Project, RegionalData};

/// One evaluated slider position.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub value: f64,
    pub estimate: Estimate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    pub parameter: GeometryParameter,
    pub points: Vec<SweepPoint>,
}

impl Sweep {
    /// Point with the highest ROI. Ties keep the earliest slider position.
    pub fn best_roi(&self) -> Option<&SweepPoint> {
        self.points.iter().fold(None, |best: Option<&SweepPoint>, p| match best {
            Some(b) if b.estimate.economics.roi_pct >= p.estimate.economics.roi_pct => Some(b),
            _ => Some(p),
        })
    }
}

/// Runs the estimator for `steps` evenly spaced values of `parameter`,
/// from the slider minimum to its maximum inclusive. Other geometry fields
/// keep the values in `base`.
pub fn sweep(
    project: &Project,
    crop: &Crop,
    regional: &RegionalData,
    base: &Geometry,
    parameter: GeometryParameter,
    steps: usize,
    config: &EstimatorConfig,
) -> Result<Sweep> {
    if steps < 2 {
        return Err(Error::invalid_sweep(format!(
            "at least 2 steps are required, got {steps}"
        )));
    }
    base.validate()?;

    let (lo, hi) = parameter.bounds();
    let step = (hi - lo) / (steps - 1) as f64;
    let points = (0..steps)
        .map(|i| {
            // Pin the last step to the bound so rounding never leaves the slider range.
            let value = if i == steps - 1 { hi } else { lo + step * i as f64 };
            let geometry = base.with(parameter, value);
            SweepPoint {
                value,
                estimate: estimate_with_crop(project, crop, regional, &geometry, config),
            }
        })
        .collect();

    tracing::debug!(%parameter, steps, "Sweep finished");
    Ok(Sweep { parameter, points })
}
