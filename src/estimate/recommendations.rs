use std::fmt;

use serde::{Deserialize, Serialize};

use super::agriculture::AgriculturalImpact;
use super::config::EstimatorConfig;
use super::economics::{Economics, Payback};
use crate::model::{Crop, Geometry, WaterRequirement};

/// Advisory produced alongside an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    RaisePanels { minimum_height_cm: f64 },
    ReduceCoverage { shading_pct: f64, shade_tolerance_pct: f64 },
    WaterSavingBenefit { water_savings_pct: f64 },
    LowReturn { roi_pct: f64 },
    LongPayback { years: f64 },
    NotRecoverable,
    HighlyCompatible { crop: String, score: f64 },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaisePanels { minimum_height_cm } => write!(
                f,
                "Raise panels to at least {minimum_height_cm:.0} cm to clear the crop at maturity"
            ),
            Self::ReduceCoverage {
                shading_pct,
                shade_tolerance_pct,
            } => write!(
                f,
                "Shading of {shading_pct:.1}% exceeds the crop's {shade_tolerance_pct:.0}% tolerance; \
                 reduce ground coverage or lower the panels"
            ),
            Self::WaterSavingBenefit { water_savings_pct } => write!(
                f,
                "Reduced evaporation saves about {water_savings_pct:.1}% water for this water-intensive crop"
            ),
            Self::LowReturn { roi_pct } => write!(
                f,
                "ROI of {roi_pct:.1}% is low; consider a higher-value crop or wider row spacing"
            ),
            Self::LongPayback { years } => write!(
                f,
                "Payback period of {years:.1} years is long; review the system size"
            ),
            Self::NotRecoverable => {
                f.write_str("Net profit is not positive; the investment cannot be recovered")
            }
            Self::HighlyCompatible { crop, score } => write!(
                f,
                "{crop} is highly compatible with agrovoltaics (score {score:.0})"
            ),
        }
    }
}

/// Collects recommendations in display order. Each check is independent.
pub fn recommendations(
    crop: &Crop,
    geometry: &Geometry,
    agriculture: &AgriculturalImpact,
    economics: &Economics,
    config: &EstimatorConfig,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let minimum_height_cm = crop.height_at_maturity_cm + config.crop_clearance_cm;
    if geometry.panel_height_cm < minimum_height_cm {
        out.push(Recommendation::RaisePanels { minimum_height_cm });
    }

    if agriculture.shading_pct > crop.shade_tolerance_pct {
        out.push(Recommendation::ReduceCoverage {
            shading_pct: agriculture.shading_pct,
            shade_tolerance_pct: crop.shade_tolerance_pct,
        });
    }

    if crop.water_requirement == WaterRequirement::High
        && agriculture.water_savings_pct >= config.water_benefit_threshold_pct
    {
        out.push(Recommendation::WaterSavingBenefit {
            water_savings_pct: agriculture.water_savings_pct,
        });
    }

    // ROI is undefined without investment; `NotRecoverable` covers that case.
    if economics.investment > 0.0 && economics.roi_pct < config.low_roi_threshold_pct {
        out.push(Recommendation::LowReturn {
            roi_pct: economics.roi_pct,
        });
    }

    match economics.payback {
        Payback::Years(years) if years > config.long_payback_threshold_years => {
            out.push(Recommendation::LongPayback { years });
        }
        Payback::NotRecoverable => out.push(Recommendation::NotRecoverable),
        Payback::Years(_) => {}
    }

    if crop.compatibility_score >= config.high_compatibility_threshold {
        out.push(Recommendation::HighlyCompatible {
            crop: crop.name.clone(),
            score: crop.compatibility_score,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agriculture(shading_pct: f64, water_savings_pct: f64) -> AgriculturalImpact {
        AgriculturalImpact {
            shading_pct,
            yield_impact_factor: 1.0,
            current_yield_t_per_ha: 5.0,
            new_yield_t_per_ha: 5.0,
            yield_change_pct: 0.0,
            water_savings_pct,
            soil_protection: true,
        }
    }

    fn economics(roi_pct: f64, payback: Payback) -> Economics {
        Economics {
            investment: 100.0,
            agriculture_revenue: 0.0,
            energy_revenue: 0.0,
            total_revenue: 0.0,
            operating_costs: 0.0,
            net_profit: roi_pct,
            payback,
            roi_pct,
        }
    }

    #[test]
    fn test_no_recommendations_for_good_setup() {
        let crop = Crop::new("c", "C", 60.0, 100.0, WaterRequirement::Low, 1.0, 50.0);
        let recs = recommendations(
            &crop,
            &Geometry::new(300.0, 800.0, 40.0, 30.0),
            &agriculture(30.0, 9.0),
            &economics(20.0, Payback::Years(5.0)),
            &EstimatorConfig::new(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_all_checks_fire_in_order() {
        let crop = Crop::new("tomato", "Tomato", 20.0, 250.0, WaterRequirement::High, 3.0, 85.0);
        let recs = recommendations(
            &crop,
            &Geometry::new(300.0, 800.0, 40.0, 30.0),
            &agriculture(40.0, 12.0),
            &economics(5.0, Payback::Years(20.0)),
            &EstimatorConfig::new(),
        );
        assert_eq!(
            recs,
            vec![
                Recommendation::RaisePanels {
                    minimum_height_cm: 350.0
                },
                Recommendation::ReduceCoverage {
                    shading_pct: 40.0,
                    shade_tolerance_pct: 20.0
                },
                Recommendation::WaterSavingBenefit {
                    water_savings_pct: 12.0
                },
                Recommendation::LowReturn { roi_pct: 5.0 },
                Recommendation::LongPayback { years: 20.0 },
                Recommendation::HighlyCompatible {
                    crop: "Tomato".to_string(),
                    score: 85.0
                },
            ]
        );
    }

    #[test]
    fn test_unrecoverable_payback_reported() {
        let crop = Crop::new("c", "C", 60.0, 100.0, WaterRequirement::Low, 1.0, 50.0);
        let recs = recommendations(
            &crop,
            &Geometry::default(),
            &agriculture(30.0, 9.0),
            &economics(-3.0, Payback::NotRecoverable),
            &EstimatorConfig::new(),
        );
        assert_eq!(
            recs,
            vec![
                Recommendation::LowReturn { roi_pct: -3.0 },
                Recommendation::NotRecoverable
            ]
        );
    }

    #[test]
    fn test_exact_clearance_is_enough() {
        let crop = Crop::new("c", "C", 60.0, 200.0, WaterRequirement::Low, 1.0, 50.0);
        let recs = recommendations(
            &crop,
            &Geometry::new(300.0, 800.0, 40.0, 30.0),
            &agriculture(30.0, 9.0),
            &economics(20.0, Payback::Years(5.0)),
            &EstimatorConfig::new(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_compatibility_threshold_inclusive() {
        let config = EstimatorConfig::new();
        let geometry = Geometry::new(300.0, 800.0, 40.0, 30.0);
        let run = |score: f64| {
            let crop = Crop::new("c", "C", 60.0, 100.0, WaterRequirement::Low, 1.0, score);
            recommendations(
                &crop,
                &geometry,
                &agriculture(30.0, 9.0),
                &economics(20.0, Payback::Years(5.0)),
                &config,
            )
        };
        assert_eq!(
            run(80.0),
            vec![Recommendation::HighlyCompatible {
                crop: "C".to_string(),
                score: 80.0
            }]
        );
        assert!(run(79.9).is_empty());
    }

    #[test]
    fn test_water_benefit_threshold_inclusive() {
        let config = EstimatorConfig::new();
        let geometry = Geometry::new(300.0, 800.0, 40.0, 30.0);
        let run = |water: WaterRequirement, savings: f64| {
            let crop = Crop::new("c", "C", 60.0, 100.0, water, 1.0, 50.0);
            recommendations(
                &crop,
                &geometry,
                &agriculture(30.0, savings),
                &economics(20.0, Payback::Years(5.0)),
                &config,
            )
        };
        assert_eq!(
            run(WaterRequirement::High, 10.0),
            vec![Recommendation::WaterSavingBenefit {
                water_savings_pct: 10.0
            }]
        );
        assert!(run(WaterRequirement::High, 9.9).is_empty());
        assert!(run(WaterRequirement::Medium, 25.0).is_empty());
        assert!(run(WaterRequirement::Low, 25.0).is_empty());
    }

    #[test]
    fn test_payback_threshold_exclusive() {
        let config = EstimatorConfig::new();
        let crop = Crop::new("c", "C", 60.0, 100.0, WaterRequirement::Low, 1.0, 50.0);
        let geometry = Geometry::new(300.0, 800.0, 40.0, 30.0);
        let run = |years: f64| {
            recommendations(
                &crop,
                &geometry,
                &agriculture(30.0, 9.0),
                &economics(20.0, Payback::Years(years)),
                &config,
            )
        };
        assert!(run(10.0).is_empty());
        assert_eq!(run(10.1), vec![Recommendation::LongPayback { years: 10.1 }]);
    }

    #[test]
    fn test_roi_threshold_exclusive() {
        let crop = Crop::new("c", "C", 60.0, 100.0, WaterRequirement::Low, 1.0, 50.0);
        let run = |roi: f64| {
            recommendations(
                &crop,
                &Geometry::new(300.0, 800.0, 40.0, 30.0),
                &agriculture(30.0, 9.0),
                &economics(roi, Payback::Years(5.0)),
                &EstimatorConfig::new(),
            )
        };
        assert!(run(15.0).is_empty());
        assert_eq!(run(14.9), vec![Recommendation::LowReturn { roi_pct: 14.9 }]);
    }

    #[test]
    fn test_no_low_return_without_investment() {
        let crop = Crop::new("c", "C", 60.0, 100.0, WaterRequirement::Low, 1.0, 50.0);
        let mut e = economics(0.0, Payback::NotRecoverable);
        e.investment = 0.0;
        let recs = recommendations(
            &crop,
            &Geometry::new(300.0, 800.0, 40.0, 30.0),
            &agriculture(30.0, 9.0),
            &e,
            &EstimatorConfig::new(),
        );
        assert_eq!(recs, vec![Recommendation::NotRecoverable]);
    }

    #[test]
    fn test_display_text() {
        let rec = Recommendation::RaisePanels {
            minimum_height_cm: 350.0,
        };
        assert_eq!(
            rec.to_string(),
            "Raise panels to at least 350 cm to clear the crop at maturity"
        );
        let rec = Recommendation::HighlyCompatible {
            crop: "Lettuce".to_string(),
            score: 95.0,
        };
        assert!(rec.to_string().starts_with("Lettuce is highly compatible"));
    }
}
