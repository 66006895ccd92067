use std::fmt;

use serde::{Deserialize, Serialize};

use super::agriculture::AgriculturalImpact;
use super::config::EstimatorConfig;
use super::energy::EnergyYield;
use super::layout::PanelLayout;
use crate::model::{Crop, Project};

/// Time needed for net profit to repay the investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    Years(f64),
    /// Net profit is zero or negative, so the investment is never repaid.
    NotRecoverable,
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match self {
            Self::Years(years) => Some(*years),
            Self::NotRecoverable => None,
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => {
                let prec = f.precision().unwrap_or(1);
                write!(f, "{years:.prec$} years")
            }
            Self::NotRecoverable => f.write_str("not recoverable"),
        }
    }
}

/// Annual economics of the combined farm and array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Economics {
    pub investment: f64,
    pub agriculture_revenue: f64,
    pub energy_revenue: f64,
    pub total_revenue: f64,
    pub operating_costs: f64,
    pub net_profit: f64,
    pub payback: Payback,
    /// Annual net profit over investment, in %. Zero without investment.
    pub roi_pct: f64,
}

pub fn economics(
    project: &Project,
    crop: &Crop,
    layout: &PanelLayout,
    energy: &EnergyYield,
    agriculture: &AgriculturalImpact,
    config: &EstimatorConfig,
) -> Economics {
    let investment =
        layout.capacity_kw * config.installed_cost_per_kw * config.structure_cost_multiplier;

    // t/ha * ha * currency/kg * kg/t
    let agriculture_revenue =
        agriculture.new_yield_t_per_ha * project.solar_area_ha * crop.market_price_per_kg * 1000.0;
    let energy_revenue = energy.annual_production_kwh * config.feed_in_tariff_per_kwh;
    let total_revenue = agriculture_revenue + energy_revenue;
    let operating_costs = total_revenue * config.operating_cost_fraction;
    let net_profit = total_revenue - operating_costs;

    // Without an array there is nothing to repay, so no payback period exists.
    let payback = if net_profit > 0.0 && investment > 0.0 {
        Payback::Years(investment / net_profit)
    } else {
        Payback::NotRecoverable
    };
    let roi_pct = if investment > 0.0 {
        net_profit / investment * 100.0
    } else {
        0.0
    };

    Economics {
        investment,
        agriculture_revenue,
        energy_revenue,
        total_revenue,
        operating_costs,
        net_profit,
        payback,
        roi_pct,
    }
}
