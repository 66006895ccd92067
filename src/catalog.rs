//! Reference tables for crops and regions.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{Crop, RegionalData, WaterRequirement};
use crate::name::SortByName;

/// Region used when a project's location is not in the table.
pub const DEFAULT_REGION_ID: &str = "central";

/// Crops available for selection, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CropCatalog {
    crops: Vec<Crop>,
    index: HashMap<String, usize>,
}

impl CropCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting invalid records and duplicate ids.
    pub fn from_crops(crops: Vec<Crop>) -> Result<Self> {
        let mut catalog = Self::new();
        for crop in crops {
            catalog.insert(crop)?;
        }
        Ok(catalog)
    }

    /// Crops commonly grown under elevated panels.
    pub fn builtin() -> Self {
        use WaterRequirement::*;
        let crops = vec![
            Crop::new("lettuce", "Lettuce", 70.0, 30.0, Medium, 2.5, 95.0),
            Crop::new("spinach", "Spinach", 65.0, 30.0, Medium, 3.0, 90.0),
            Crop::new("strawberry", "Strawberry", 50.0, 30.0, High, 6.0, 85.0),
            Crop::new("potato", "Potato", 45.0, 60.0, Medium, 0.9, 80.0),
            Crop::new("tomato", "Tomato", 30.0, 180.0, High, 1.8, 70.0),
            Crop::new("pepper", "Pepper", 35.0, 90.0, High, 2.2, 72.0),
            Crop::new("grape", "Grape", 40.0, 200.0, Medium, 3.5, 75.0),
            Crop::new("alfalfa", "Alfalfa", 40.0, 80.0, Medium, 0.4, 78.0),
            Crop::new("wheat", "Wheat", 20.0, 100.0, Low, 0.35, 55.0),
            Crop::new("corn", "Corn", 10.0, 250.0, High, 0.3, 35.0),
        ];
        Self::from_crops(crops).unwrap_or_default()
    }

    pub fn insert(&mut self, crop: Crop) -> Result<()> {
        crop.validate()?;
        if self.index.contains_key(&crop.id) {
            return Err(Error::DuplicateId {
                kind: "crop",
                id: crop.id,
            });
        }
        self.index.insert(crop.id.clone(), self.crops.len());
        self.crops.push(crop);
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Crop> {
        self.index.get(id).map(|&i| &self.crops[i])
    }

    pub fn sorted_by_name(&self) -> Vec<&Crop> {
        let mut crops: Vec<&Crop> = self.crops.iter().collect();
        crops.as_mut_slice().sort_by_name();
        crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

/// Regional sun-hour table, keyed by region id.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    regions: HashMap<String, RegionalData>,
}

impl RegionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: Vec<RegionalData>) -> Result<Self> {
        let mut table = Self::new();
        for region in regions {
            table.insert(region)?;
        }
        Ok(table)
    }

    pub fn builtin() -> Self {
        let regions = vec![
            RegionalData::new("desert", "Desert", 8.5),
            RegionalData::new("southern", "Southern", 7.5),
            RegionalData::new("mediterranean", "Mediterranean", 7.2),
            RegionalData::new("central", "Central", 6.5),
            RegionalData::new("coastal", "Coastal", 6.0),
            RegionalData::new("northern", "Northern", 5.0),
            RegionalData::new("alpine", "Alpine", 4.5),
        ];
        Self::from_regions(regions).unwrap_or_default()
    }

    pub fn insert(&mut self, region: RegionalData) -> Result<()> {
        region.validate()?;
        if self.regions.contains_key(&region.id) {
            return Err(Error::DuplicateId {
                kind: "region",
                id: region.id,
            });
        }
        self.regions.insert(region.id.clone(), region);
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&RegionalData> {
        self.regions.get(id)
    }

    /// Looks up `id`, falling back to [`DEFAULT_REGION_ID`] and finally to the
    /// first region in name order.
    pub fn find_or_default(&self, id: &str) -> Option<&RegionalData> {
        if let Some(region) = self.find(id) {
            return Some(region);
        }
        tracing::warn!(location = id, fallback = DEFAULT_REGION_ID, "Unknown region");
        self.find(DEFAULT_REGION_ID)
            .or_else(|| self.sorted_by_name().into_iter().next())
    }

    pub fn sorted_by_name(&self) -> Vec<&RegionalData> {
        let mut regions: Vec<&RegionalData> = self.regions.values().collect();
        regions.as_mut_slice().sort_by_name();
        regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
