use std::fmt;

use serde::{Deserialize, Serialize};

use super::agriculture::AgriculturalImpact;
use super::economics::Economics;
use super::energy::EnergyYield;
use super::layout::PanelLayout;
use super::recommendations::Recommendation;
use crate::model::Geometry;
use crate::uid::ProjectId;

/// Complete result of one estimator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub project_id: ProjectId,
    pub farm_name: String,
    pub crop_id: String,
    pub region_id: String,
    pub geometry: Geometry,
    pub panels: PanelLayout,
    pub energy: EnergyYield,
    pub agriculture: AgriculturalImpact,
    pub economics: Economics,
    pub recommendations: Vec<Recommendation>,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(1);
        let g = &self.geometry;
        let p = &self.panels;
        let e = &self.energy;
        let a = &self.agriculture;
        let x = &self.economics;

        writeln!(f, "{} ({}, crop: {}, region: {})", self.farm_name, self.project_id, self.crop_id, self.region_id)?;
        writeln!(
            f,
            "  geometry: height {:.0} cm, spacing {:.0} cm, coverage {:.0}%, tilt {:.0} deg",
            g.panel_height_cm, g.row_spacing_cm, g.ground_coverage_pct, g.panel_tilt_deg
        )?;
        writeln!(f, "Panels")?;
        writeln!(f, "  count:              {}", p.total_panels)?;
        writeln!(f, "  capacity:           {:.prec$} kW", p.capacity_kw)?;
        writeln!(f, "Energy")?;
        writeln!(f, "  annual production:  {:.prec$} kWh", e.annual_production_kwh)?;
        writeln!(f, "  monthly average:    {:.prec$} kWh", e.monthly_average_kwh)?;
        writeln!(f, "  performance ratio:  {:.3}", e.performance_ratio)?;
        writeln!(f, "  specific yield:     {:.prec$} kWh/kWp", e.specific_yield_kwh_per_kwp)?;
        writeln!(f, "Agriculture")?;
        writeln!(f, "  shading:            {:.prec$}%", a.shading_pct)?;
        writeln!(
            f,
            "  yield:              {:.2} -> {:.2} t/ha ({:+.prec$}%)",
            a.current_yield_t_per_ha, a.new_yield_t_per_ha, a.yield_change_pct
        )?;
        writeln!(f, "  water savings:      {:.prec$}%", a.water_savings_pct)?;
        writeln!(f, "  soil protection:    {}", if a.soil_protection { "yes" } else { "no" })?;
        writeln!(f, "Economics")?;
        writeln!(f, "  investment:         {:.0}", x.investment)?;
        writeln!(f, "  agriculture revenue: {:.0}", x.agriculture_revenue)?;
        writeln!(f, "  energy revenue:     {:.0}", x.energy_revenue)?;
        writeln!(f, "  operating costs:    {:.0}", x.operating_costs)?;
        writeln!(f, "  net profit:         {:.0}", x.net_profit)?;
        writeln!(f, "  payback:            {:.prec$}", x.payback)?;
        writeln!(f, "  ROI:                {:.prec$}%", x.roi_pct)?;
        if !self.recommendations.is_empty() {
            writeln!(f, "Recommendations")?;
            for rec in &self.recommendations {
                writeln!(f, "  - {rec}")?;
            }
        }
        Ok(())
    }
}
