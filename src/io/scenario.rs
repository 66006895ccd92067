//! Scenario file format.
//!
//! A scenario is a JSON document holding a project, an optional geometry and
//! optional crop/region tables. Missing tables fall back to the built-in
//! ones; supplied tables replace them entirely.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::{CropCatalog, RegionTable};
use crate::estimate::{Estimate, EstimatorConfig};
use crate::model::{Crop, Geometry, IrrigationMethod, Project, RegionalData};
use crate::session::EstimatorSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub project: Project,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crops: Option<Vec<Crop>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<RegionalData>>,
}

impl Scenario {
    /// Example scenario written by `agrovolt template`.
    pub fn template() -> Self {
        Self {
            project: Project::new("Sunny Meadow Farm", 25.0, 10.0, "lettuce", 25.0, "southern")
                .with_irrigation(IrrigationMethod::Drip),
            geometry: Geometry::default(),
            crops: None,
            regions: None,
        }
    }

    pub fn crop_catalog(&self) -> crate::error::Result<CropCatalog> {
        match &self.crops {
            Some(crops) => CropCatalog::from_crops(crops.clone()),
            None => Ok(CropCatalog::builtin()),
        }
    }

    pub fn region_table(&self) -> crate::error::Result<RegionTable> {
        match &self.regions {
            Some(regions) => RegionTable::from_regions(regions.clone()),
            None => Ok(RegionTable::builtin()),
        }
    }

    /// Validates all records and builds a session with `config`.
    pub fn into_session(self, config: EstimatorConfig) -> Result<EstimatorSession> {
        let crops = self.crop_catalog().context("Invalid crop table")?;
        let regions = self.region_table().context("Invalid region table")?;
        EstimatorSession::new(self.project, self.geometry, crops, regions, config)
            .context("Invalid scenario inputs")
    }
}

/// Reads a scenario from a JSON file.
pub fn read_scenario(path: &Path) -> Result<Scenario> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open scenario: {}", path.display()))?;
    let reader = BufReader::new(file);

    let scenario: Scenario = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse scenario from: {}", path.display()))?;

    Ok(scenario)
}

pub fn write_scenario(path: &Path, scenario: &Scenario) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, scenario)
        .with_context(|| format!("Failed to serialize scenario to: {}", path.display()))?;

    Ok(())
}

pub fn from_scenario_str(json: &str) -> Result<Scenario> {
    serde_json::from_str(json).context("Failed to deserialize scenario from string")
}

pub fn to_scenario_string(scenario: &Scenario) -> Result<String> {
    serde_json::to_string_pretty(scenario).context("Failed to serialize scenario to string")
}

/// Writes an estimate as pretty-printed JSON.
pub fn write_estimate(path: &Path, estimate: &Estimate) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, estimate)
        .with_context(|| format!("Failed to serialize estimate to: {}", path.display()))?;

    Ok(())
}

pub fn to_estimate_string(estimate: &Estimate) -> Result<String> {
    serde_json::to_string_pretty(estimate).context("Failed to serialize estimate to string")
}
