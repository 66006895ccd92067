use serde::{Deserialize, Serialize};

use super::config::EstimatorConfig;
use crate::model::{Geometry, Project};

/// Panel count and installed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Area available to panels after applying ground coverage, in m^2.
    pub effective_area_m2: f64,
    /// Land consumed per panel including its share of row spacing, in m^2.
    pub area_per_panel_m2: f64,
    pub total_panels: u64,
    /// Nameplate capacity in kW.
    pub capacity_kw: f64,
}

/// Packs panels into the solar-eligible area.
///
/// Each panel occupies its own area plus a strip of row spacing, so
/// `panels = floor(area * coverage / (panel_area + spacing_m * row_depth))`.
pub fn panel_layout(project: &Project, geometry: &Geometry, config: &EstimatorConfig) -> PanelLayout {
    let effective_area_m2 =
        (project.solar_area_ha * 10_000.0 * (geometry.ground_coverage_pct / 100.0)).max(0.0);
    let area_per_panel_m2 =
        config.panel_area_m2 + (geometry.row_spacing_cm / 100.0) * config.row_depth_m;

    let total_panels = if area_per_panel_m2 > 0.0 {
        // Non-negative and finite, so the cast only truncates.
        (effective_area_m2 / area_per_panel_m2).floor() as u64
    } else {
        0
    };
    let capacity_kw = total_panels as f64 * config.panel_power_w / 1000.0;

    PanelLayout {
        effective_area_m2,
        area_per_panel_m2,
        total_panels,
        capacity_kw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(solar_area_ha: f64) -> Project {
        Project::new("farm", 20.0, solar_area_ha, "lettuce", 5.0, "southern")
    }

    #[test]
    fn test_reference_packing() {
        let geometry = Geometry::new(350.0, 800.0, 40.0, 30.0);
        let layout = panel_layout(&project(10.0), &geometry, &EstimatorConfig::new());

        // 100 000 m^2 * 0.4 / (2 + 8 * 2)
        assert!((layout.effective_area_m2 - 40_000.0).abs() < 1e-6);
        assert!((layout.area_per_panel_m2 - 18.0).abs() < 1e-10);
        assert_eq!(layout.total_panels, 2222);
        assert!((layout.capacity_kw - 999.9).abs() < 1e-9);
    }

    #[test]
    fn test_zero_area_gives_no_panels() {
        let layout = panel_layout(&project(0.0), &Geometry::default(), &EstimatorConfig::new());
        assert_eq!(layout.total_panels, 0);
        assert_eq!(layout.capacity_kw, 0.0);
    }

    #[test]
    fn test_wider_spacing_fits_fewer_panels() {
        let config = EstimatorConfig::new();
        let narrow = panel_layout(&project(5.0), &Geometry::new(300.0, 400.0, 40.0, 0.0), &config);
        let wide = panel_layout(&project(5.0), &Geometry::new(300.0, 1200.0, 40.0, 0.0), &config);
        assert!(wide.total_panels < narrow.total_panels);
    }
}
