use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{Error, check_non_negative, check_range};

/// Constants used by the estimator.
///
/// Defaults reproduce the reference calculator. A TOML file can override any
/// subset of the fields; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Area of one panel in m^2.
    pub panel_area_m2: f64,
    /// Nameplate power of one panel in W.
    pub panel_power_w: f64,
    /// Row width in m multiplied by the row spacing (in m) to get the
    /// spacing-derived area per panel.
    pub row_depth_m: f64,

    /// Performance ratio before height/spacing adjustments.
    pub base_performance_ratio: f64,
    /// Upper clamp of the performance ratio.
    pub max_performance_ratio: f64,
    /// Reference panel height above which a penalty applies, in cm.
    pub reference_height_cm: f64,
    /// Performance-ratio penalty per 100 cm above the reference height.
    pub height_penalty_per_m: f64,
    /// Reference row spacing above which a bonus applies, in cm.
    pub reference_spacing_cm: f64,
    /// Performance-ratio bonus per 1000 cm above the reference spacing.
    pub spacing_bonus_per_10m: f64,
    /// Upper bound of the spacing bonus.
    pub max_spacing_bonus: f64,

    /// Panel height at which shading equals the ground coverage, in cm.
    pub shading_reference_height_cm: f64,
    /// Upper bound of the shading percentage.
    pub max_shading_pct: f64,
    /// Yield loss per unit of shading above the crop's tolerance.
    pub yield_sensitivity: f64,
    /// Lower bound of the yield impact factor.
    pub min_yield_factor: f64,
    /// Water savings per shading percentage point.
    pub water_savings_per_shading_pct: f64,
    /// Upper bound of water savings, in %.
    pub max_water_savings_pct: f64,
    /// Minimum panel height for soil protection, in cm.
    pub soil_protection_min_height_cm: f64,
    /// Minimum row spacing for soil protection, in cm.
    pub soil_protection_min_spacing_cm: f64,

    /// Installed cost in currency per kW.
    pub installed_cost_per_kw: f64,
    /// Multiplier for elevated agrovoltaic structures.
    pub structure_cost_multiplier: f64,
    /// Feed-in tariff in currency per kWh.
    pub feed_in_tariff_per_kwh: f64,
    /// Operating costs as a fraction of total revenue.
    pub operating_cost_fraction: f64,

    /// Required clearance above crop height at maturity, in cm.
    pub crop_clearance_cm: f64,
    /// Water savings above which water-hungry crops benefit, in %.
    pub water_benefit_threshold_pct: f64,
    /// ROI below which the return is flagged as low, in %.
    pub low_roi_threshold_pct: f64,
    /// Payback above which the period is flagged as long, in years.
    pub long_payback_threshold_years: f64,
    /// Compatibility score from which a crop counts as highly compatible.
    pub high_compatibility_threshold: f64,
}

impl EstimatorConfig {
    pub fn new() -> Self {
        Self {
            panel_area_m2: 2.0,
            panel_power_w: 450.0,
            row_depth_m: 2.0,
            base_performance_ratio: 0.75,
            max_performance_ratio: 0.85,
            reference_height_cm: 300.0,
            height_penalty_per_m: 0.05,
            reference_spacing_cm: 600.0,
            spacing_bonus_per_10m: 0.05,
            max_spacing_bonus: 0.1,
            shading_reference_height_cm: 400.0,
            max_shading_pct: 80.0,
            yield_sensitivity: 1.5,
            min_yield_factor: 0.3,
            water_savings_per_shading_pct: 0.3,
            max_water_savings_pct: 30.0,
            soil_protection_min_height_cm: 250.0,
            soil_protection_min_spacing_cm: 600.0,
            installed_cost_per_kw: 4500.0,
            structure_cost_multiplier: 1.4,
            feed_in_tariff_per_kwh: 1.2,
            operating_cost_fraction: 0.15,
            crop_clearance_cm: 100.0,
            water_benefit_threshold_pct: 10.0,
            low_roi_threshold_pct: 15.0,
            long_payback_threshold_years: 10.0,
            high_compatibility_threshold: 80.0,
        }
    }

    /// Parses a TOML document and validates the result.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse estimator config")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize estimator config")
    }

    /// Every field must be finite. Rates and bounds must also be non-negative,
    /// and ratios must lie in `[0, 1]`.
    pub fn validate(&self) -> crate::error::Result<()> {
        let finite = [
            ("reference_height_cm", self.reference_height_cm),
            ("height_penalty_per_m", self.height_penalty_per_m),
            ("reference_spacing_cm", self.reference_spacing_cm),
            ("spacing_bonus_per_10m", self.spacing_bonus_per_10m),
            ("max_spacing_bonus", self.max_spacing_bonus),
            ("soil_protection_min_height_cm", self.soil_protection_min_height_cm),
            ("soil_protection_min_spacing_cm", self.soil_protection_min_spacing_cm),
            ("crop_clearance_cm", self.crop_clearance_cm),
            ("water_benefit_threshold_pct", self.water_benefit_threshold_pct),
            ("low_roi_threshold_pct", self.low_roi_threshold_pct),
            ("long_payback_threshold_years", self.long_payback_threshold_years),
            ("high_compatibility_threshold", self.high_compatibility_threshold),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(Error::NotFinite { field });
            }
        }

        let positive = [
            ("panel_area_m2", self.panel_area_m2),
            ("panel_power_w", self.panel_power_w),
            ("shading_reference_height_cm", self.shading_reference_height_cm),
        ];
        for (field, value) in positive {
            check_non_negative(field, value)?;
            if value == 0.0 {
                return Err(Error::invalid_config(field, value, "must be positive"));
            }
        }

        let non_negative = [
            ("row_depth_m", self.row_depth_m),
            ("installed_cost_per_kw", self.installed_cost_per_kw),
            ("structure_cost_multiplier", self.structure_cost_multiplier),
            ("feed_in_tariff_per_kwh", self.feed_in_tariff_per_kwh),
            ("yield_sensitivity", self.yield_sensitivity),
            ("water_savings_per_shading_pct", self.water_savings_per_shading_pct),
            ("max_shading_pct", self.max_shading_pct),
            ("max_water_savings_pct", self.max_water_savings_pct),
        ];
        for (field, value) in non_negative {
            check_non_negative(field, value)?;
        }

        let fractions = [
            ("base_performance_ratio", self.base_performance_ratio),
            ("max_performance_ratio", self.max_performance_ratio),
            ("min_yield_factor", self.min_yield_factor),
            ("operating_cost_fraction", self.operating_cost_fraction),
        ];
        for (field, value) in fractions {
            check_range(field, value, 0.0, 1.0)?;
        }
        Ok(())
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
