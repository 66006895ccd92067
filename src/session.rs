//! Stateful wrapper that recomputes the estimate whenever an input changes.

use crate::catalog::{CropCatalog, RegionTable};
use crate::error::Result;
use crate::estimate::{Estimate, EstimatorConfig, estimate_with_crop};
use crate::model::{Geometry, Project, RegionalData};

/// Holds the current inputs together with the latest estimate.
///
/// Every setter validates its argument first. A rejected value leaves the
/// session untouched; an accepted one triggers a recompute that replaces the
/// previous result.
#[derive(Debug, Clone)]
pub struct EstimatorSession {
    project: Project,
    geometry: Geometry,
    crops: CropCatalog,
    regions: RegionTable,
    config: EstimatorConfig,
    result: Option<Estimate>,
}

impl EstimatorSession {
    pub fn new(
        project: Project,
        geometry: Geometry,
        crops: CropCatalog,
        regions: RegionTable,
        config: EstimatorConfig,
    ) -> Result<Self> {
        project.validate()?;
        geometry.validate()?;
        config.validate()?;
        let mut session = Self {
            project,
            geometry,
            crops,
            regions,
            config,
            result: None,
        };
        session.recompute();
        Ok(session)
    }

    /// Session over the built-in crop and region tables with default config.
    pub fn with_builtin(project: Project, geometry: Geometry) -> Result<Self> {
        Self::new(
            project,
            geometry,
            CropCatalog::builtin(),
            RegionTable::builtin(),
            EstimatorConfig::new(),
        )
    }

    pub fn set_project(&mut self, project: Project) -> Result<Option<&Estimate>> {
        project.validate()?;
        self.project = project;
        Ok(self.recompute())
    }

    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<Option<&Estimate>> {
        geometry.validate()?;
        self.geometry = geometry;
        Ok(self.recompute())
    }

    pub fn select_crop(&mut self, crop_id: &str) -> Option<&Estimate> {
        self.project.crop_id = crop_id.to_string();
        self.recompute()
    }

    pub fn set_location(&mut self, location: &str) -> Option<&Estimate> {
        self.project.location = location.to_string();
        self.recompute()
    }

    /// Replaces the estimator constants. The config is validated first.
    pub fn set_config(&mut self, config: EstimatorConfig) -> Result<Option<&Estimate>> {
        config.validate()?;
        self.config = config;
        Ok(self.recompute())
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn crops(&self) -> &CropCatalog {
        &self.crops
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Region the current location resolves to, after fallback.
    pub fn region(&self) -> Option<&RegionalData> {
        self.regions.find_or_default(&self.project.location)
    }

    pub fn result(&self) -> Option<&Estimate> {
        self.result.as_ref()
    }

    fn recompute(&mut self) -> Option<&Estimate> {
        let crop = self.crops.find(&self.project.crop_id);
        let region = self.regions.find_or_default(&self.project.location);

        self.result = match (crop, region) {
            (Some(crop), Some(region)) => Some(estimate_with_crop(
                &self.project,
                crop,
                region,
                &self.geometry,
                &self.config,
            )),
            (None, _) => {
                tracing::debug!(crop = %self.project.crop_id, "Crop not in catalog, no estimate");
                None
            }
            (_, None) => {
                tracing::debug!(location = %self.project.location, "No region data, no estimate");
                None
            }
        };

        if let Some(result) = &self.result {
            tracing::debug!(
                project = %result.project_id,
                panels = result.panels.total_panels,
                roi_pct = result.economics.roi_pct,
                "Estimate recomputed"
            );
        }
        self.result.as_ref()
    }
}
