//! Typed input records for the estimator.
//!
//! All records are plain serde data. Range checks happen in `validate()`,
//! never inside the estimator.

pub mod crop;
pub mod geometry;
pub mod project;
pub mod region;

pub use crop::{Crop, WaterRequirement};
pub use geometry::{Geometry, GeometryParameter};
pub use project::{IrrigationMethod, Project};
pub use region::RegionalData;
