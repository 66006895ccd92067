use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, check_range};

pub const PANEL_HEIGHT_RANGE_CM: (f64, f64) = (200.0, 500.0);
pub const ROW_SPACING_RANGE_CM: (f64, f64) = (400.0, 1200.0);
pub const GROUND_COVERAGE_RANGE_PCT: (f64, f64) = (20.0, 60.0);
pub const PANEL_TILT_RANGE_DEG: (f64, f64) = (0.0, 60.0);

/// User-adjustable panel geometry.
///
/// Every field maps to a bounded slider; [`Geometry::validate`] enforces
/// the same bounds for values coming from files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Clearance between ground and the lower panel edge, in cm.
    pub panel_height_cm: f64,
    /// Distance between panel rows, in cm.
    pub row_spacing_cm: f64,
    /// Share of the solar-eligible area covered by panels, in %.
    pub ground_coverage_pct: f64,
    /// Panel tilt in degrees. Carried with the geometry but not used by the estimator.
    pub panel_tilt_deg: f64,
}

impl Geometry {
    pub fn new(
        panel_height_cm: f64,
        row_spacing_cm: f64,
        ground_coverage_pct: f64,
        panel_tilt_deg: f64,
    ) -> Self {
        Self {
            panel_height_cm,
            row_spacing_cm,
            ground_coverage_pct,
            panel_tilt_deg,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (lo, hi) = PANEL_HEIGHT_RANGE_CM;
        check_range("panel_height_cm", self.panel_height_cm, lo, hi)?;
        let (lo, hi) = ROW_SPACING_RANGE_CM;
        check_range("row_spacing_cm", self.row_spacing_cm, lo, hi)?;
        let (lo, hi) = GROUND_COVERAGE_RANGE_PCT;
        check_range("ground_coverage_pct", self.ground_coverage_pct, lo, hi)?;
        let (lo, hi) = PANEL_TILT_RANGE_DEG;
        check_range("panel_tilt_deg", self.panel_tilt_deg, lo, hi)?;
        Ok(())
    }

    pub fn get(&self, parameter: GeometryParameter) -> f64 {
        match parameter {
            GeometryParameter::PanelHeight => self.panel_height_cm,
            GeometryParameter::RowSpacing => self.row_spacing_cm,
            GeometryParameter::GroundCoverage => self.ground_coverage_pct,
        }
    }

    /// Returns a copy with `parameter` replaced by `value`.
    pub fn with(mut self, parameter: GeometryParameter, value: f64) -> Self {
        match parameter {
            GeometryParameter::PanelHeight => self.panel_height_cm = value,
            GeometryParameter::RowSpacing => self.row_spacing_cm = value,
            GeometryParameter::GroundCoverage => self.ground_coverage_pct = value,
        }
        self
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(300.0, 800.0, 40.0, 30.0)
    }
}

/// Geometry sliders that affect the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryParameter {
    PanelHeight,
    RowSpacing,
    GroundCoverage,
}

impl GeometryParameter {
    pub const ALL: [GeometryParameter; 3] = [
        GeometryParameter::PanelHeight,
        GeometryParameter::RowSpacing,
        GeometryParameter::GroundCoverage,
    ];

    /// Slider bounds `(min, max)`.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Self::PanelHeight => PANEL_HEIGHT_RANGE_CM,
            Self::RowSpacing => ROW_SPACING_RANGE_CM,
            Self::GroundCoverage => GROUND_COVERAGE_RANGE_PCT,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::PanelHeight | Self::RowSpacing => "cm",
            Self::GroundCoverage => "%",
        }
    }
}

impl fmt::Display for GeometryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PanelHeight => "panel height",
            Self::RowSpacing => "row spacing",
            Self::GroundCoverage => "ground coverage",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_is_valid() {
        assert!(Geometry::default().validate().is_ok());
    }

    #[test]
    fn test_slider_bounds_inclusive() {
        assert!(Geometry::new(200.0, 400.0, 20.0, 0.0).validate().is_ok());
        assert!(Geometry::new(500.0, 1200.0, 60.0, 60.0).validate().is_ok());
    }

    #[test]
    fn test_height_below_slider_rejected() {
        let err = Geometry::new(199.0, 800.0, 40.0, 30.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                field: "panel_height_cm",
                ..
            }
        ));
    }

    #[test]
    fn test_coverage_above_slider_rejected() {
        assert!(Geometry::new(300.0, 800.0, 61.0, 30.0).validate().is_err());
    }

    #[test]
    fn test_with_replaces_only_target() {
        let g = Geometry::default().with(GeometryParameter::RowSpacing, 1000.0);
        assert!((g.row_spacing_cm - 1000.0).abs() < 1e-10);
        assert!((g.panel_height_cm - 300.0).abs() < 1e-10);
        assert!((g.get(GeometryParameter::RowSpacing) - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let g: Geometry = serde_json::from_str(r#"{"panel_height_cm": 400.0}"#).unwrap();
        assert!((g.panel_height_cm - 400.0).abs() < 1e-10);
        assert!((g.ground_coverage_pct - 40.0).abs() < 1e-10);
    }
}
