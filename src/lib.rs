pub mod catalog;
pub mod error;
pub mod estimate;
pub mod io;
pub mod logging;
pub mod model;
mod name;
pub mod session;
pub mod sweep;
mod uid;

// Prelude
pub use catalog::{CropCatalog, RegionTable};
pub use error::{Error, Result};
pub use estimate::{Estimate, EstimatorConfig, Payback, Recommendation, estimate, estimate_with_crop};
pub use model::{Crop, Geometry, GeometryParameter, IrrigationMethod, Project, RegionalData, WaterRequirement};
pub use name::{Reference, SortByName};
pub use session::EstimatorSession;
pub use sweep::{Sweep, SweepPoint, sweep};
pub use uid::ProjectId;
