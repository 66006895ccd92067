use serde::{Deserialize, Serialize};

use crate::error::{Result, check_range};
use crate::name::Reference;

/// Regional solar resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalData {
    pub id: String,
    pub name: String,
    /// Average daily peak sun hours.
    pub avg_sun_hours: f64,
}

impl RegionalData {
    pub fn new(id: &str, name: &str, avg_sun_hours: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avg_sun_hours,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_range("avg_sun_hours", self.avg_sun_hours, 0.0, 24.0)
    }
}

impl Reference for RegionalData {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_hours_bounds() {
        assert!(RegionalData::new("a", "A", 7.5).validate().is_ok());
        assert!(RegionalData::new("a", "A", 25.0).validate().is_err());
        assert!(RegionalData::new("a", "A", -0.1).validate().is_err());
    }
}
